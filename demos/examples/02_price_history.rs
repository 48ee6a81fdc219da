use earnmove::{ChartPeriod, Earnmove};
use earnmove_demos::common::{get_connector, init_tracing, ticker_from_args};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let em = Earnmove::builder().with_connector(get_connector()).build()?;
    let symbol = ticker_from_args()?;

    for period in ChartPeriod::ALL {
        match em.price_history(&symbol, period).await {
            Ok(series) => {
                let first = series.first().map(|p| p.close);
                let last = series.last().map(|p| p.close);
                let spacing = if series.is_intraday() { "intraday" } else { "daily" };
                println!(
                    "{:>4}: {} {spacing} closes, first {:?}, last {:?}",
                    period.label(),
                    series.len(),
                    first,
                    last
                );
            }
            Err(e) => tracing::warn!(period = %period, error = %e, "price history unavailable"),
        }
    }

    Ok(())
}
