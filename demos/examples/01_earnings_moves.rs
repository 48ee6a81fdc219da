use earnmove::{BarTone, Earnmove};
use earnmove_demos::common::{get_connector, init_tracing, ticker_from_args};
use rust_decimal::prelude::ToPrimitive;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let em = Earnmove::builder()
        .with_connector(get_connector())
        .earnings_limit(8)
        .build()?;
    let symbol = ticker_from_args()?;

    let report = em.earnings_moves(&symbol).await?;
    if report.is_unavailable() {
        println!("No earnings moves available for {symbol}.");
        return Ok(());
    }

    println!("Earnings moves for {symbol}");
    println!("{:<12} {:<12} {:>9}", "Earnings", "Price Date", "Change");
    for row in report.table_rows() {
        println!(
            "{:<12} {:<12} {:>9}",
            row.earnings_date.to_string(),
            row.price_date,
            row.change
        );
    }

    println!();
    for bar in report.chart_bars() {
        let width = bar.pct_change.abs().round().to_usize().unwrap_or(0).max(1);
        let glyph = match bar.tone {
            BarTone::Gain => '+',
            BarTone::Loss => '-',
        };
        let line: String = std::iter::repeat_n(glyph, width).collect();
        println!("{} {:>7}% {line}", bar.label, bar.pct_change);
    }

    let summary = report.summary();
    println!(
        "\n{} of {} events aligned, average absolute move {}",
        summary.successes,
        summary.count,
        summary
            .average_abs_move
            .map_or_else(|| "N/A".to_string(), |m| format!("{m}%"))
    );

    Ok(())
}
