use earnmove::Earnmove;
use earnmove_demos::common::{get_connector, init_tracing, ticker_from_args};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let em = Earnmove::builder().with_connector(get_connector()).build()?;
    let symbol = ticker_from_args()?;

    let tables = em.summary_tables(&symbol).await?;
    println!("{} ({symbol})", tables.name);
    for table in tables.tables() {
        println!("\n{:<20} Value", table.title);
        for row in &table.rows {
            println!("{:<20} {}", row.label, row.value);
        }
    }

    Ok(())
}
