use earnmove_core::QuoteSnapshot;
use rust_decimal::Decimal;

pub fn by_symbol(s: &str) -> Option<QuoteSnapshot> {
    match s {
        "AAPL" => Some(
            QuoteSnapshot::new()
                .with_text("longName", "Apple Inc.")
                .with_text("country", "United States")
                .with_text("sector", "Technology")
                .with_text("industry", "Consumer Electronics")
                .with_number("marketCap", Decimal::new(3_374_000_000_000, 0))
                .with_number("enterpriseValue", Decimal::new(3_412_000_000_000, 0))
                .with_number("fullTimeEmployees", Decimal::new(164_000, 0))
                .with_number("currentPrice", Decimal::new(222_91, 2))
                .with_number("previousClose", Decimal::new(225_91, 2))
                .with_number("dayHigh", Decimal::new(225_35, 2))
                .with_number("dayLow", Decimal::new(220_27, 2))
                .with_number("fiftyTwoWeekHigh", Decimal::new(237_49, 2))
                .with_number("fiftyTwoWeekLow", Decimal::new(164_08, 2))
                .with_number("forwardEps", Decimal::new(7_46, 2))
                .with_number("forwardPE", Decimal::new(29_88, 2))
                .with_number("dividendRate", Decimal::new(1_00, 2))
                .with_number("dividendYield", Decimal::new(45, 2))
                .with_text("recommendationKey", "buy"),
        ),
        "MSFT" => Some(
            QuoteSnapshot::new()
                .with_text("longName", "Microsoft Corporation")
                .with_text("country", "United States")
                .with_text("sector", "Technology")
                .with_text("industry", "Software - Infrastructure")
                .with_number("marketCap", Decimal::new(3_051_000_000_000, 0))
                .with_number("fullTimeEmployees", Decimal::new(228_000, 0))
                .with_number("currentPrice", Decimal::new(410_37, 2))
                .with_number("previousClose", Decimal::new(406_35, 2))
                .with_number("forwardEps", Decimal::new(14_89, 2))
                .with_number("forwardPE", Decimal::new(27_56, 2))
                .with_number("pegRatio", Decimal::new(2_19, 2))
                .with_number("dividendRate", Decimal::new(3_32, 2))
                .with_number("dividendYield", Decimal::new(81, 2))
                .with_text("recommendationKey", "strong_buy"),
        ),
        _ => None,
    }
}
