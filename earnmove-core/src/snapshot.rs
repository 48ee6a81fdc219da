use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::{
    NOT_AVAILABLE, format_compact_usd, format_percent, format_ratio, format_usd,
};
use earnmove_types::EarnmoveError;

/// A single scalar field of a quote record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Numeric field.
    Number(Decimal),
    /// Textual field.
    Text(String),
}

impl FieldValue {
    /// Numeric view, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Text view, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

/// Loosely-typed quote/profile record keyed by upstream field name.
///
/// Any field may be absent. Rendering decides per field what to show when it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteSnapshot {
    fields: BTreeMap<String, FieldValue>,
}

impl QuoteSnapshot {
    /// Empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object.
    ///
    /// Numbers may be plain or wrapped as `{ "raw": n }`. Nulls, booleans,
    /// arrays and other nested objects are skipped.
    ///
    /// # Errors
    /// Returns `Data` if `value` is not a JSON object.
    pub fn from_json(value: &Value) -> Result<Self, EarnmoveError> {
        let obj = value
            .as_object()
            .ok_or_else(|| EarnmoveError::Data("quote snapshot must be a JSON object".into()))?;
        let fields = obj
            .iter()
            .filter_map(|(k, v)| field_from_json(v).map(|fv| (k.clone(), fv)))
            .collect();
        Ok(Self { fields })
    }

    /// Set a numeric field.
    #[must_use]
    pub fn with_number(mut self, key: impl Into<String>, value: Decimal) -> Self {
        self.fields.insert(key.into(), FieldValue::Number(value));
        self
    }

    /// Set a text field.
    #[must_use]
    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), FieldValue::Text(value.into()));
        self
    }

    /// Look up a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Numeric field, `None` if absent or textual.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<Decimal> {
        self.get(key).and_then(FieldValue::as_number)
    }

    /// Text field, `None` if absent or numeric.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    /// Company display name (`longName`).
    #[must_use]
    pub fn long_name(&self) -> Option<&str> {
        self.text("longName")
    }

    /// Number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn field_from_json(v: &Value) -> Option<FieldValue> {
    match v {
        Value::String(s) => Some(FieldValue::Text(s.clone())),
        Value::Number(n) => decimal_from_json(n).map(FieldValue::Number),
        Value::Object(o) => match o.get("raw") {
            Some(Value::Number(n)) => decimal_from_json(n).map(FieldValue::Number),
            _ => None,
        },
        Value::Null | Value::Bool(_) | Value::Array(_) => None,
    }
}

fn decimal_from_json(n: &serde_json::Number) -> Option<Decimal> {
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    let s = n.to_string();
    Decimal::from_str(&s)
        .or_else(|_| Decimal::from_scientific(&s))
        .ok()
}

/// How one field is rendered in a summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FieldFormat {
    /// Text as-is; numbers with their natural representation.
    Text,
    /// Compact dollar amount (`$1.2B`).
    CompactUsd,
    /// Dollar amount with two decimals.
    Usd,
    /// Plain number with two decimals.
    Ratio,
    /// Percent value with two decimals and a `%` suffix.
    Percent,
    /// Whole number without decimals.
    Integer,
    /// Text with the first letter upper-cased (`buy` to `Buy`).
    Capitalized,
}

impl FieldFormat {
    /// Render a field, falling back to `"N/A"` when it is missing or of the wrong kind.
    #[must_use]
    pub fn render(self, value: Option<&FieldValue>) -> String {
        let rendered = match (self, value) {
            (Self::Text, Some(FieldValue::Text(s))) => Some(s.clone()),
            (Self::Text, Some(FieldValue::Number(n))) => Some(n.normalize().to_string()),
            (Self::Capitalized, Some(FieldValue::Text(s))) => Some(capitalize(s)),
            (Self::CompactUsd, Some(FieldValue::Number(n))) => Some(format_compact_usd(*n)),
            (Self::Usd, Some(FieldValue::Number(n))) => Some(format_usd(*n)),
            (Self::Ratio, Some(FieldValue::Number(n))) => Some(format_ratio(*n)),
            (Self::Percent, Some(FieldValue::Number(n))) => Some(format_percent(*n)),
            (Self::Integer, Some(FieldValue::Number(n))) => Some(n.trunc().normalize().to_string()),
            _ => None,
        };
        rendered.unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// One rendered `(label, value)` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Row label.
    pub label: String,
    /// Rendered value, `"N/A"` when unavailable.
    pub value: String,
}

/// A titled two-column table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    /// Header of the label column; the value column is always `"Value"`.
    pub title: String,
    /// Rows in display order.
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Render a table from `(label, key, format)` rows.
    #[must_use]
    pub fn render(title: &str, snapshot: &QuoteSnapshot, layout: &[(&str, &str, FieldFormat)]) -> Self {
        let rows = layout
            .iter()
            .map(|(label, key, fmt)| SummaryRow {
                label: (*label).to_string(),
                value: fmt.render(snapshot.get(key)),
            })
            .collect();
        Self {
            title: title.to_string(),
            rows,
        }
    }

    /// Rendered value for `label`.
    #[must_use]
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }
}

const STOCK_INFO: &[(&str, &str, FieldFormat)] = &[
    ("Country", "country", FieldFormat::Text),
    ("Sector", "sector", FieldFormat::Text),
    ("Industry", "industry", FieldFormat::Text),
    ("Market Cap", "marketCap", FieldFormat::CompactUsd),
    ("Enterprise Value", "enterpriseValue", FieldFormat::CompactUsd),
    ("Employees", "fullTimeEmployees", FieldFormat::Integer),
];

const PRICE_INFO: &[(&str, &str, FieldFormat)] = &[
    ("Current Price", "currentPrice", FieldFormat::Usd),
    ("Previous Close", "previousClose", FieldFormat::Usd),
    ("Day High", "dayHigh", FieldFormat::Usd),
    ("Day Low", "dayLow", FieldFormat::Usd),
    ("52 Week High", "fiftyTwoWeekHigh", FieldFormat::Usd),
    ("52 Week Low", "fiftyTwoWeekLow", FieldFormat::Usd),
];

const BUSINESS_METRICS: &[(&str, &str, FieldFormat)] = &[
    ("EPS (FWD)", "forwardEps", FieldFormat::Ratio),
    ("P/E (FWD)", "forwardPE", FieldFormat::Ratio),
    ("PEG Ratio", "pegRatio", FieldFormat::Ratio),
    ("Div Rate (FWD)", "dividendRate", FieldFormat::Usd),
    ("Div Yield (FWD)", "dividendYield", FieldFormat::Percent),
    ("Recommendation", "recommendationKey", FieldFormat::Capitalized),
];

/// The three fundamentals tables shown next to the earnings moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTables {
    /// Company name, `"N/A"` when missing.
    pub name: String,
    /// Country, sector, industry, size and head count.
    pub stock_info: SummaryTable,
    /// Current and reference prices.
    pub price_info: SummaryTable,
    /// Valuation and dividend figures.
    pub business_metrics: SummaryTable,
}

impl SummaryTables {
    /// Build all tables from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &QuoteSnapshot) -> Self {
        Self {
            name: FieldFormat::Text.render(snapshot.get("longName")),
            stock_info: SummaryTable::render("Stock Info", snapshot, STOCK_INFO),
            price_info: SummaryTable::render("Price Info", snapshot, PRICE_INFO),
            business_metrics: SummaryTable::render("Business Metrics", snapshot, BUSINESS_METRICS),
        }
    }

    /// Tables in display order.
    #[must_use]
    pub fn tables(&self) -> [&SummaryTable; 3] {
        [&self.stock_info, &self.price_info, &self.business_metrics]
    }
}
