//! Line item domain models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::pricing::PriceBreakdown;

/// A named, priced item kept in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
}

impl LineItem {
    pub fn new(name: impl Into<String>, breakdown: PriceBreakdown) -> Self {
        LineItem {
            name: name.into(),
            breakdown,
        }
    }
}

/// Input model for pricing (and optionally committing) a new item.
///
/// Numbers may arrive as JSON numbers or as text. Missing, blank, null or
/// non-numeric amounts are read as zero, so a half-filled form still
/// previews.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLineItem {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "decimal_input_format::deserialize_decimal")]
    pub base_cost: Decimal,
    /// Margin or markup in percent; the configured default rate when absent
    #[serde(
        default,
        deserialize_with = "decimal_input_format::deserialize_option_decimal"
    )]
    pub rate: Option<Decimal>,
    /// Ancillary costs keyed by cost field key
    #[serde(default, deserialize_with = "decimal_input_format::deserialize_costs")]
    pub additional_costs: HashMap<String, Decimal>,
}

impl NewLineItem {
    /// Checks the only business rule on committed items: a non-blank name
    /// and a positive base cost.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.base_cost <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Base cost must be positive, got {}",
                self.base_cost
            ))
            .into());
        }
        Ok(())
    }
}

mod decimal_input_format {
    use std::collections::HashMap;

    use rust_decimal::prelude::FromPrimitive;
    use rust_decimal::Decimal;
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    use crate::pricing::{coerce_f64, coerce_str, parse_decimal_tolerant};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DecimalInput {
        Number(f64),
        String(String),
        Other(IgnoredAny),
    }

    impl DecimalInput {
        fn coerce(input: Option<Self>) -> Decimal {
            match input {
                Some(DecimalInput::Number(n)) => coerce_f64(Some(n)),
                Some(DecimalInput::String(s)) => coerce_str(Some(&s)),
                Some(DecimalInput::Other(_)) | None => Decimal::ZERO,
            }
        }
    }

    pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<DecimalInput>::deserialize(deserializer)?;
        Ok(DecimalInput::coerce(raw))
    }

    /// Blank or unreadable values become `None` so the default applies.
    pub fn deserialize_option_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<DecimalInput>::deserialize(deserializer)?;
        Ok(match raw {
            Some(DecimalInput::Number(n)) => Decimal::from_f64(n),
            Some(DecimalInput::String(s)) => parse_decimal_tolerant(&s),
            Some(DecimalInput::Other(_)) | None => None,
        })
    }

    pub fn deserialize_costs<'de, D>(deserializer: D) -> Result<HashMap<String, Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<HashMap<String, Option<DecimalInput>>>::deserialize(deserializer)?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| (key, DecimalInput::coerce(value)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> NewLineItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_new_line_item_reads_numbers_and_text() {
        let item = parse(json!({
            "name": "Mesa",
            "baseCost": "1500.5",
            "rate": 30,
            "additionalCosts": { "transporte": 200, "embalaje": " 50 " }
        }));

        assert_eq!(item.name, "Mesa");
        assert_eq!(item.base_cost, dec!(1500.5));
        assert_eq!(item.rate, Some(dec!(30)));
        assert_eq!(item.additional_costs["transporte"], dec!(200));
        assert_eq!(item.additional_costs["embalaje"], dec!(50));
    }

    #[test]
    fn test_new_line_item_missing_blank_or_null_amounts_are_zero() {
        for base_cost in [json!(null), json!(""), json!("abc"), json!(true)] {
            let item = parse(json!({ "name": "Mesa", "baseCost": base_cost }));
            assert_eq!(item.base_cost, Decimal::ZERO);
        }

        let item = parse(json!({ "rate": 30 }));
        assert_eq!(item.name, "");
        assert_eq!(item.base_cost, Decimal::ZERO);
        assert!(item.additional_costs.is_empty());
    }

    #[test]
    fn test_new_line_item_unreadable_rate_falls_back_to_default() {
        for rate in [json!(null), json!(""), json!("n/a")] {
            let item = parse(json!({ "name": "Mesa", "baseCost": 100, "rate": rate }));
            assert_eq!(item.rate, None);
        }
    }

    #[test]
    fn test_new_line_item_null_cost_entries_are_zero() {
        let item = parse(json!({
            "name": "Mesa",
            "baseCost": 100,
            "additionalCosts": { "transporte": null, "flete": "" }
        }));

        assert_eq!(item.additional_costs["transporte"], Decimal::ZERO);
        assert_eq!(item.additional_costs["flete"], Decimal::ZERO);

        let item = parse(json!({ "name": "Mesa", "baseCost": 100, "additionalCosts": null }));
        assert!(item.additional_costs.is_empty());
    }

    #[test]
    fn test_validate_rejects_blank_name_and_non_positive_cost() {
        let blank = parse(json!({ "name": "  ", "baseCost": 100 }));
        assert!(blank.validate().is_err());

        let zero = parse(json!({ "name": "Mesa" }));
        assert!(zero.validate().is_err());

        let ok = parse(json!({ "name": "Mesa", "baseCost": 100 }));
        assert!(ok.validate().is_ok());
    }
}
