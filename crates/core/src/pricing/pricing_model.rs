//! Pricing domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::MARKUP_MARGIN_GAP_THRESHOLD;
use crate::errors::{Error, ValidationError};

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// How the entered percentage turns a cost into a sale price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CalculationMethod {
    /// Percentage of the resulting sale price: `price = cost / (1 - rate)`
    #[default]
    #[serde(rename = "margen")]
    Margin,
    /// Percentage of the cost: `price = cost * (1 + rate)`
    #[serde(rename = "markup")]
    Markup,
}

impl CalculationMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CalculationMethod::Margin => "margen",
            CalculationMethod::Markup => "markup",
        }
    }

    /// Human-readable label for selectors.
    pub const fn label(&self) -> &'static str {
        match self {
            CalculationMethod::Margin => "Margen (Profesional)",
            CalculationMethod::Markup => "Markup (Tradicional)",
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "margen" | "margin" => Ok(CalculationMethod::Margin),
            "markup" => Ok(CalculationMethod::Markup),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown calculation method '{}'",
                other
            )))),
        }
    }
}

/// Full result of pricing one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_cost: Decimal,
    pub additional_costs: Decimal,
    /// `base_cost + additional_costs`
    pub total_cost: Decimal,
    /// Sale price before tax
    pub net_price: Decimal,
    pub tax_amount: Decimal,
    /// Sale price including tax
    pub gross_price: Decimal,
    /// `net_price - total_cost`
    pub profit: Decimal,
    /// The percentage as entered, before any clamping
    pub input_rate: Decimal,
    pub real_margin_on_sales: Decimal,
    pub real_markup_on_cost: Decimal,
    /// Largest discount off `gross_price` that still recovers `total_cost`
    pub max_discount_percent: Decimal,
    pub method: CalculationMethod,
    pub tax_rate: Decimal,
}

impl PriceBreakdown {
    /// Gross price after applying `discount_percent`.
    pub fn price_after_discount(&self, discount_percent: Decimal) -> Decimal {
        let keep = Decimal::ONE.saturating_sub(discount_percent / ONE_HUNDRED);
        self.gross_price.saturating_mul(keep)
    }

    /// The lowest price that still breaks even: the gross price after the
    /// maximum discount. Equals `total_cost` up to rounding.
    pub fn break_even_price(&self) -> Decimal {
        self.price_after_discount(self.max_discount_percent)
    }

    /// Returns the markup/margin comparison when a markup overstates the real
    /// margin on sales (e.g. a 50% markup is only a 33.3% margin).
    pub fn markup_margin_gap(&self) -> Option<MarkupMarginGap> {
        if self.method != CalculationMethod::Markup {
            return None;
        }
        let gap = self
            .real_markup_on_cost
            .saturating_sub(self.real_margin_on_sales)
            .abs();
        if gap > MARKUP_MARGIN_GAP_THRESHOLD {
            Some(MarkupMarginGap {
                markup_on_cost: self.real_markup_on_cost,
                margin_on_sales: self.real_margin_on_sales,
            })
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupMarginGap {
    pub markup_on_cost: Decimal,
    pub margin_on_sales: Decimal,
}

/// Raw numeric inputs for one calculation, already coerced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PricingInput {
    pub base_cost: Decimal,
    pub additional_costs: Decimal,
    pub rate: Decimal,
}

/// Parses a decimal leniently: surrounding whitespace is ignored and
/// scientific notation is accepted. Returns `None` for blank or unparsable
/// text.
pub fn parse_decimal_tolerant(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Coerces optional text to a decimal; missing, blank or non-numeric is zero.
pub fn coerce_str(value: Option<&str>) -> Decimal {
    match value {
        Some(raw) => parse_decimal_tolerant(raw).unwrap_or_else(|| {
            if !raw.trim().is_empty() {
                log::debug!("Non-numeric input '{}' treated as zero", raw);
            }
            Decimal::ZERO
        }),
        None => Decimal::ZERO,
    }
}

/// Coerces an optional float to a decimal; missing, NaN, infinite or
/// out-of-range values are zero.
pub fn coerce_f64(value: Option<f64>) -> Decimal {
    value.and_then(Decimal::from_f64).unwrap_or(Decimal::ZERO)
}
