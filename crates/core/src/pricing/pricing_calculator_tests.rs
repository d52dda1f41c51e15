//! Tests for the pricing calculation and breakdown helpers.

#[cfg(test)]
mod tests {
    use crate::pricing::pricing_calculator::{compute, compute_input};
    use crate::pricing::pricing_model::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn assert_close(actual: Decimal, expected: Decimal) {
        let diff = (actual - expected).abs();
        assert!(
            diff <= dec!(0.000001),
            "expected {} to be within 1e-6 of {}",
            actual,
            expected
        );
    }

    // ============================================================================
    // Margin method
    // ============================================================================

    #[test]
    fn test_margin_reference_scenario() {
        let b = compute(
            dec!(100000),
            Decimal::ZERO,
            dec!(30),
            dec!(19),
            CalculationMethod::Margin,
        );

        assert_eq!(b.total_cost, dec!(100000));
        assert_eq!(b.net_price.round_dp(2), dec!(142857.14));
        assert_eq!(b.tax_amount.round_dp(2), dec!(27142.86));
        assert_eq!(b.gross_price.round_dp(2), dec!(170000.00));
        assert_eq!(b.profit.round_dp(2), dec!(42857.14));
        assert_eq!(b.max_discount_percent.round_dp(2), dec!(41.18));
        assert_eq!(b.real_margin_on_sales, dec!(30));
        assert_eq!(b.real_markup_on_cost.round_dp(2), dec!(42.86));
        assert_eq!(b.input_rate, dec!(30));
        assert_eq!(b.method, CalculationMethod::Margin);
        assert_eq!(b.tax_rate, dec!(19));
    }

    #[test]
    fn test_margin_zero_rate_prices_at_cost() {
        let b = compute(dec!(5000), dec!(500), Decimal::ZERO, dec!(19), CalculationMethod::Margin);

        assert_eq!(b.net_price, dec!(5500));
        assert_eq!(b.profit, Decimal::ZERO);
        assert_eq!(b.real_markup_on_cost, Decimal::ZERO);
    }

    #[test]
    fn test_margin_rate_at_or_above_hundred_is_clamped() {
        for rate in [dec!(100), dec!(150), dec!(200)] {
            let b = compute(dec!(1000), Decimal::ZERO, rate, Decimal::ZERO, CalculationMethod::Margin);

            assert_eq!(b.net_price, dec!(100000));
            assert_eq!(b.real_margin_on_sales, dec!(99));
            assert_eq!(b.input_rate, rate);
        }
    }

    #[test]
    fn test_margin_zero_cost() {
        let b = compute(Decimal::ZERO, Decimal::ZERO, dec!(30), dec!(19), CalculationMethod::Margin);

        assert_eq!(b.net_price, Decimal::ZERO);
        assert_eq!(b.gross_price, Decimal::ZERO);
        assert_eq!(b.real_markup_on_cost, Decimal::ZERO);
        assert_eq!(b.max_discount_percent, Decimal::ZERO);
    }

    // ============================================================================
    // Markup method
    // ============================================================================

    #[test]
    fn test_markup_reference_scenario() {
        let b = compute(
            dec!(100000),
            Decimal::ZERO,
            dec!(30),
            dec!(19),
            CalculationMethod::Markup,
        );

        assert_eq!(b.net_price, dec!(130000));
        assert_eq!(b.real_markup_on_cost, dec!(30));
        assert_eq!(b.real_margin_on_sales.round_dp(2), dec!(23.08));
        assert_eq!(b.tax_amount, dec!(24700));
        assert_eq!(b.gross_price, dec!(154700));
        assert_eq!(b.profit, dec!(30000));
    }

    #[test]
    fn test_markup_is_not_clamped() {
        let b = compute(dec!(1000), Decimal::ZERO, dec!(150), Decimal::ZERO, CalculationMethod::Markup);

        assert_eq!(b.net_price, dec!(2500));
        assert_eq!(b.real_markup_on_cost, dec!(150));
        assert_eq!(b.real_margin_on_sales, dec!(60));
    }

    #[test]
    fn test_markup_zero_cost() {
        let b = compute(Decimal::ZERO, Decimal::ZERO, dec!(50), dec!(19), CalculationMethod::Markup);

        assert_eq!(b.net_price, Decimal::ZERO);
        assert_eq!(b.real_margin_on_sales, Decimal::ZERO);
        assert_eq!(b.max_discount_percent, Decimal::ZERO);
    }

    #[test]
    fn test_markup_to_margin_round_trip() {
        let markup = compute(dec!(80000), dec!(7000), dec!(45), dec!(19), CalculationMethod::Markup);
        let margin = compute(
            dec!(80000),
            dec!(7000),
            markup.real_margin_on_sales,
            dec!(19),
            CalculationMethod::Margin,
        );

        assert_close(margin.net_price, markup.net_price);
        assert_close(margin.gross_price, markup.gross_price);
    }

    // ============================================================================
    // Shared derivations
    // ============================================================================

    #[test]
    fn test_additional_costs_are_part_of_total() {
        let b = compute(dec!(10000), dec!(2500), dec!(20), Decimal::ZERO, CalculationMethod::Markup);

        assert_eq!(b.total_cost, dec!(12500));
        assert_eq!(b.net_price, dec!(15000));
        assert_eq!(b.profit, dec!(2500));
    }

    #[test]
    fn test_max_discount_recovers_total_cost() {
        let b = compute(dec!(100000), dec!(15000), dec!(35), dec!(19), CalculationMethod::Margin);

        assert_close(b.break_even_price(), b.total_cost);
        assert_close(b.price_after_discount(b.max_discount_percent), b.total_cost);
    }

    #[test]
    fn test_zero_tax_keeps_gross_equal_to_net() {
        let b = compute(dec!(1000), Decimal::ZERO, dec!(25), Decimal::ZERO, CalculationMethod::Margin);

        assert_eq!(b.tax_amount, Decimal::ZERO);
        assert_eq!(b.gross_price, b.net_price);
    }

    #[test]
    fn test_compute_input_matches_compute() {
        let input = PricingInput {
            base_cost: dec!(1000),
            additional_costs: dec!(250),
            rate: dec!(40),
        };
        let via_input = compute_input(&input, dec!(19), CalculationMethod::Margin);
        let direct = compute(dec!(1000), dec!(250), dec!(40), dec!(19), CalculationMethod::Margin);

        assert_eq!(via_input, direct);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let a = compute(dec!(1234.56), dec!(78.9), dec!(33.3), dec!(19), CalculationMethod::Margin);
        let b = compute(dec!(1234.56), dec!(78.9), dec!(33.3), dec!(19), CalculationMethod::Margin);

        assert_eq!(a, b);
    }

    #[test]
    fn test_huge_inputs_do_not_panic() {
        let b = compute(Decimal::MAX, Decimal::MAX, dec!(99.5), dec!(30), CalculationMethod::Margin);
        assert_eq!(b.total_cost, Decimal::MAX);

        let b = compute(Decimal::MAX, Decimal::ZERO, dec!(200), dec!(30), CalculationMethod::Markup);
        assert_eq!(b.net_price, Decimal::MAX);
    }

    // ============================================================================
    // Coercion
    // ============================================================================

    #[test]
    fn test_coerce_str_blank_and_garbage_to_zero() {
        assert_eq!(coerce_str(None), Decimal::ZERO);
        assert_eq!(coerce_str(Some("  ")), Decimal::ZERO);
        assert_eq!(coerce_str(Some("abc")), Decimal::ZERO);
        assert_eq!(coerce_str(Some(" 1500.5 ")), dec!(1500.5));
        assert_eq!(coerce_str(Some("1e3")), dec!(1000));
    }

    #[test]
    fn test_coerce_f64() {
        assert_eq!(coerce_f64(None), Decimal::ZERO);
        assert_eq!(coerce_f64(Some(f64::NAN)), Decimal::ZERO);
        assert_eq!(coerce_f64(Some(f64::INFINITY)), Decimal::ZERO);
        assert_eq!(coerce_f64(Some(1e40)), Decimal::ZERO);
        assert_eq!(coerce_f64(Some(19.5)), dec!(19.5));
        assert_eq!(coerce_f64(Some(0.25)), dec!(0.25));
    }

    #[test]
    fn test_parse_decimal_tolerant() {
        assert_eq!(parse_decimal_tolerant("500000"), Some(dec!(500000)));
        assert_eq!(parse_decimal_tolerant("2.5E2"), Some(dec!(250)));
        assert_eq!(parse_decimal_tolerant(""), None);
        assert_eq!(parse_decimal_tolerant("n/a"), None);
    }

    // ============================================================================
    // Model helpers
    // ============================================================================

    #[test]
    fn test_markup_margin_gap_flagged_for_markup_only() {
        let markup = compute(dec!(1000), Decimal::ZERO, dec!(50), dec!(19), CalculationMethod::Markup);
        let gap = markup.markup_margin_gap().unwrap();
        assert_eq!(gap.markup_on_cost, dec!(50));
        assert_eq!(gap.margin_on_sales.round_dp(1), dec!(33.3));

        let margin = compute(dec!(1000), Decimal::ZERO, dec!(50), dec!(19), CalculationMethod::Margin);
        assert!(margin.markup_margin_gap().is_none());

        let flat = compute(dec!(1000), Decimal::ZERO, Decimal::ZERO, dec!(19), CalculationMethod::Markup);
        assert!(flat.markup_margin_gap().is_none());
    }

    #[test]
    fn test_markup_margin_gap_saturates_on_extreme_rates() {
        let b = compute(dec!(-1000), Decimal::ZERO, Decimal::MIN, Decimal::ZERO, CalculationMethod::Markup);

        let gap = b.markup_margin_gap().unwrap();
        assert_eq!(gap.markup_on_cost, Decimal::MIN);
        assert_eq!(gap.margin_on_sales, dec!(100));
    }

    #[test]
    fn test_calculation_method_parse_and_serialize() {
        assert_eq!("margen".parse::<CalculationMethod>().unwrap(), CalculationMethod::Margin);
        assert_eq!(" Markup ".parse::<CalculationMethod>().unwrap(), CalculationMethod::Markup);
        assert!("cost-plus".parse::<CalculationMethod>().is_err());

        let json = serde_json::to_string(&CalculationMethod::Margin).unwrap();
        assert_eq!(json, r#""margen""#);
        let parsed: CalculationMethod = serde_json::from_str(r#""markup""#).unwrap();
        assert_eq!(parsed, CalculationMethod::Markup);
        assert_eq!(CalculationMethod::default(), CalculationMethod::Margin);
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let b = compute(dec!(100), Decimal::ZERO, dec!(50), Decimal::ZERO, CalculationMethod::Markup);
        let value = serde_json::to_value(&b).unwrap();

        assert_eq!(value["netPrice"], serde_json::json!(150.0));
        assert_eq!(value["realMarkupOnCost"], serde_json::json!(50.0));
        assert_eq!(value["method"], serde_json::json!("markup"));
    }
}
