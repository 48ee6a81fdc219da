use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::align::{AlignmentResult, PERCENT_DECIMALS, round_fixed};
use crate::format::{format_or_na, format_percent};
use earnmove_types::Symbol;

/// Sign bucket used to color a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarTone {
    /// Strictly positive move.
    Gain,
    /// Zero or negative move.
    Loss,
}

impl BarTone {
    /// Tone for a percent move; zero counts as a loss.
    #[must_use]
    pub fn of(pct: Decimal) -> Self {
        if pct > Decimal::ZERO {
            Self::Gain
        } else {
            Self::Loss
        }
    }
}

/// One table row. Failed alignments render as `"N/A"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRow {
    /// Announcement date.
    pub earnings_date: NaiveDate,
    /// Reaction day as `YYYY-MM-DD`, or `"N/A"`.
    pub price_date: String,
    /// Percent move as `"5.00%"`, or `"N/A"`.
    pub change: String,
}

/// One chart bar, only for successful alignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveBar {
    /// Categorical axis label (the earnings date as `YYYY-MM-DD`).
    pub label: String,
    /// Reaction day.
    pub price_date: NaiveDate,
    /// Percent move.
    pub pct_change: Decimal,
    /// Sign bucket.
    pub tone: BarTone,
}

/// Aggregate figures over a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovesSummary {
    /// Number of earnings events considered.
    pub count: usize,
    /// Number of events that produced a move.
    pub successes: usize,
    /// Mean absolute move, two decimals.
    pub average_abs_move: Option<Decimal>,
    /// Highest strictly positive move, `None` if nothing rose.
    pub largest_gain: Option<Decimal>,
    /// Lowest strictly negative move, `None` if nothing fell.
    pub largest_loss: Option<Decimal>,
}

/// Alignment results for one symbol, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsMovesReport {
    /// Ticker the report was built for.
    pub symbol: Symbol,
    /// One result per earnings event, in event order.
    pub results: Vec<AlignmentResult>,
}

impl EarningsMovesReport {
    /// Wrap aligner output.
    #[must_use]
    pub const fn new(symbol: Symbol, results: Vec<AlignmentResult>) -> Self {
        Self { symbol, results }
    }

    /// Table rows, one per result, in result order.
    #[must_use]
    pub fn table_rows(&self) -> Vec<MoveRow> {
        self.results
            .iter()
            .map(|r| MoveRow {
                earnings_date: r.earnings_date,
                price_date: format_or_na(r.price_date(), |d| d.to_string()),
                change: format_or_na(r.pct_change(), format_percent),
            })
            .collect()
    }

    /// Chart bars for successful results, ascending by earnings date.
    #[must_use]
    pub fn chart_bars(&self) -> Vec<MoveBar> {
        let mut aligned: Vec<&AlignmentResult> =
            self.results.iter().filter(|r| r.is_aligned()).collect();
        aligned.sort_by_key(|r| r.earnings_date);
        aligned
            .into_iter()
            .filter_map(|r| {
                let m = r.earnings_move()?;
                Some(MoveBar {
                    label: r.earnings_date.to_string(),
                    price_date: m.price_date,
                    pct_change: m.pct_change,
                    tone: BarTone::of(m.pct_change),
                })
            })
            .collect()
    }

    /// Counts and extremes over the successful moves.
    #[must_use]
    pub fn summary(&self) -> MovesSummary {
        let moves: Vec<Decimal> = self
            .results
            .iter()
            .filter_map(AlignmentResult::pct_change)
            .collect();
        let average_abs_move = if moves.is_empty() {
            None
        } else {
            let total: Decimal = moves.iter().map(|m| m.abs()).sum();
            total
                .checked_div(Decimal::from(moves.len()))
                .map(|avg| round_fixed(avg, PERCENT_DECIMALS))
        };
        MovesSummary {
            count: self.results.len(),
            successes: moves.len(),
            average_abs_move,
            largest_gain: moves.iter().copied().filter(|m| *m > Decimal::ZERO).max(),
            largest_loss: moves.iter().copied().filter(|m| *m < Decimal::ZERO).min(),
        }
    }

    /// True if no event produced a move.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.results.iter().all(|r| !r.is_aligned())
    }
}
