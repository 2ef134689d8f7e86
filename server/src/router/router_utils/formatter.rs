//! Renders query outcomes as user-facing text.

use rust_decimal::RoundingStrategy;
use serde::Deserialize;

use crate::router::router_types::{edge::Cost, outcome::Outcome};

/// Separator placed between labels of the winning path.
pub const PATH_SEPARATOR: &str = " - ";

/// Phrase placed between the path and its cost.
pub const COST_PHRASE: &str = " ao custo de ";

/// Message for [`Outcome::NoRoute`].
pub const NO_ROUTE_MESSAGE: &str = "Nenhuma rota disponível entre os pontos informados.";

/// Message for [`Outcome::IdenticalEndpoints`].
pub const IDENTICAL_ENDPOINTS_MESSAGE: &str = "Origem e destino não podem ser iguais.";

/// Message for [`Outcome::SearchAborted`].
pub const SEARCH_ABORTED_MESSAGE: &str = "Busca interrompida: limite de exploração atingido.";

/// How a path cost is rendered.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostFormat {
    /// en-US currency without fraction digits: `$40`, `$1,250`.
    #[default]
    Currency,

    /// pt-BR number with two fraction digits: `40,00`, `1.234,50`.
    Decimal,
}

impl CostFormat {
    /// Renders a single cost. Midpoints round away from zero.
    pub fn format_cost(&self, cost: Cost) -> String {
        let (places, separator) = match self {
            CostFormat::Currency => (0, ','),
            CostFormat::Decimal => (2, '.'),
        };
        let rounded = cost
            .abs()
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        let sign = if cost.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let digits = format!("{:.*}", places as usize, rounded);
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        let whole = group_thousands(whole, separator);
        match self {
            CostFormat::Currency => format!("{sign}${whole}"),
            CostFormat::Decimal => format!("{sign}{whole},{fraction}"),
        }
    }
}

/// Inserts `separator` every three digits from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Turns an [`Outcome`] into the text returned to callers.
#[derive(Debug, Copy, Clone, Default)]
pub struct ResultFormatter {
    cost_format: CostFormat,
}

impl ResultFormatter {
    /// Creates a formatter using the given cost rendering.
    pub fn new(cost_format: CostFormat) -> Self {
        ResultFormatter { cost_format }
    }

    /// The cost rendering in use.
    pub fn cost_format(&self) -> CostFormat {
        self.cost_format
    }

    /// Renders an outcome, e.g. `GRU - BRC - SCL - ORL - CDG ao custo de $40`.
    pub fn render(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Found(candidate) => format!(
                "{}{}{}",
                candidate.path.join(PATH_SEPARATOR),
                COST_PHRASE,
                self.cost_format.format_cost(candidate.total_cost)
            ),
            Outcome::NoRoute => NO_ROUTE_MESSAGE.to_string(),
            Outcome::IdenticalEndpoints => IDENTICAL_ENDPOINTS_MESSAGE.to_string(),
            Outcome::SearchAborted => SEARCH_ABORTED_MESSAGE.to_string(),
        }
    }
}
