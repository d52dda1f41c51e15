//! Settings domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_RATE, DEFAULT_TAX_RATE, MAX_DEFAULT_RATE, MAX_TAX_RATE, MIN_DEFAULT_RATE,
    MIN_TAX_RATE,
};
use crate::errors::{Result, ValidationError};
use crate::pricing::CalculationMethod;

/// Process-wide pricing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Tax (IVA) rate in percent, 0 to 30
    pub tax_rate: Decimal,
    /// Rate used when an item does not carry its own, 0 to 200
    pub default_rate: Decimal,
    pub method: CalculationMethod,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tax_rate: DEFAULT_TAX_RATE,
            default_rate: DEFAULT_RATE,
            method: CalculationMethod::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        check_range("taxRate", self.tax_rate, MIN_TAX_RATE, MAX_TAX_RATE)?;
        check_range(
            "defaultRate",
            self.default_rate,
            MIN_DEFAULT_RATE,
            MAX_DEFAULT_RATE,
        )?;
        Ok(())
    }

    /// Returns a copy with the provided fields replaced.
    pub fn merged(&self, update: &SettingsUpdate) -> Settings {
        Settings {
            tax_rate: update.tax_rate.unwrap_or(self.tax_rate),
            default_rate: update.default_rate.unwrap_or(self.default_rate),
            method: update.method.unwrap_or(self.method),
        }
    }
}

/// Partial settings update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub tax_rate: Option<Decimal>,
    pub default_rate: Option<Decimal>,
    pub method: Option<CalculationMethod>,
}

fn check_range(field: &str, value: Decimal, min: Decimal, max: Decimal) -> Result<()> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            value: value.to_string(),
        }
        .into());
    }
    Ok(())
}
