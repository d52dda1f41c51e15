//! The pricing calculation.
//!
//! [`compute`] is a pure function of its arguments: the tax rate and the
//! calculation method are always passed in, never read from settings. It
//! never fails and never panics: degenerate divisions fall back to zero and
//! all arithmetic saturates.

use rust_decimal::Decimal;

use super::pricing_model::{CalculationMethod, PriceBreakdown, PricingInput};
use crate::constants::{CLAMPED_MARGIN_RATE, MARGIN_RATE_CEILING};

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Prices one item.
///
/// * `base_cost` and `additional_costs` are summed into the total cost.
/// * `rate` is a margin on sale or a markup on cost depending on `method`.
///   Margin rates at or above 100 are clamped to 99.
/// * `tax_rate` is applied on top of the net price.
pub fn compute(
    base_cost: Decimal,
    additional_costs: Decimal,
    rate: Decimal,
    tax_rate: Decimal,
    method: CalculationMethod,
) -> PriceBreakdown {
    let total_cost = base_cost.saturating_add(additional_costs);

    let (net_price, real_margin_on_sales, real_markup_on_cost) = match method {
        CalculationMethod::Margin => {
            let margin = if rate >= MARGIN_RATE_CEILING {
                log::debug!("Margin {} clamped to {}", rate, CLAMPED_MARGIN_RATE);
                CLAMPED_MARGIN_RATE
            } else {
                rate
            };
            let net_price = safe_div(total_cost, Decimal::ONE.saturating_sub(margin / ONE_HUNDRED));
            let markup = percent_of(net_price.saturating_sub(total_cost), total_cost);
            (net_price, margin, markup)
        }
        CalculationMethod::Markup => {
            let net_price =
                total_cost.saturating_mul(Decimal::ONE.saturating_add(rate / ONE_HUNDRED));
            let margin = percent_of(net_price.saturating_sub(total_cost), net_price);
            (net_price, margin, rate)
        }
    };

    let tax_amount = net_price.saturating_mul(tax_rate / ONE_HUNDRED);
    let gross_price = net_price.saturating_add(tax_amount);
    let profit = net_price.saturating_sub(total_cost);
    let max_discount_percent = percent_of(gross_price.saturating_sub(total_cost), gross_price);

    PriceBreakdown {
        base_cost,
        additional_costs,
        total_cost,
        net_price,
        tax_amount,
        gross_price,
        profit,
        input_rate: rate,
        real_margin_on_sales,
        real_markup_on_cost,
        max_discount_percent,
        method,
        tax_rate,
    }
}

/// Convenience wrapper over [`compute`] for an already coerced input.
pub fn compute_input(
    input: &PricingInput,
    tax_rate: Decimal,
    method: CalculationMethod,
) -> PriceBreakdown {
    compute(
        input.base_cost,
        input.additional_costs,
        input.rate,
        tax_rate,
        method,
    )
}

/// `part / whole * 100`, or zero when `whole` is not positive.
fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    safe_div(part, whole).saturating_mul(ONE_HUNDRED)
}

/// Division that returns zero for a zero divisor and saturates on overflow.
fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}
