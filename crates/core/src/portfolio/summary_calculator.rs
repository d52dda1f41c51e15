use rust_decimal::Decimal;

use super::summary_model::PortfolioSummary;
use crate::line_items::LineItem;

/// Folds line items into totals, averages and ROI.
///
/// An empty slice yields an all-zero summary.
pub fn summarize(items: &[LineItem]) -> PortfolioSummary {
    let mut summary = items
        .iter()
        .map(|item| &item.breakdown)
        .fold(PortfolioSummary::default(), |mut acc, b| {
            acc.item_count += 1;
            acc.total_base_cost = acc.total_base_cost.saturating_add(b.base_cost);
            acc.total_additional_costs =
                acc.total_additional_costs.saturating_add(b.additional_costs);
            acc.total_cost = acc.total_cost.saturating_add(b.total_cost);
            acc.total_net_price = acc.total_net_price.saturating_add(b.net_price);
            acc.total_tax_amount = acc.total_tax_amount.saturating_add(b.tax_amount);
            acc.total_gross_price = acc.total_gross_price.saturating_add(b.gross_price);
            acc.total_profit = acc.total_profit.saturating_add(b.profit);
            // Running sums; turned into means below
            acc.average_margin_on_sales =
                acc.average_margin_on_sales.saturating_add(b.real_margin_on_sales);
            acc.average_max_discount_percent = acc
                .average_max_discount_percent
                .saturating_add(b.max_discount_percent);
            acc
        });

    if summary.item_count == 0 {
        return summary;
    }

    let count = Decimal::from(summary.item_count);
    summary.average_margin_on_sales = mean(summary.average_margin_on_sales, count);
    summary.average_max_discount_percent = mean(summary.average_max_discount_percent, count);
    summary.average_min_price = mean(summary.total_cost, count);
    summary.roi = roi(summary.total_gross_price, summary.total_cost);

    summary
}

fn mean(sum: Decimal, count: Decimal) -> Decimal {
    sum.checked_div(count).unwrap_or(Decimal::ZERO)
}

fn roi(total_gross_price: Decimal, total_cost: Decimal) -> Decimal {
    if total_cost <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    total_gross_price
        .checked_div(total_cost)
        .map(|ratio| {
            ratio
                .saturating_sub(Decimal::ONE)
                .saturating_mul(Decimal::ONE_HUNDRED)
        })
        .unwrap_or(Decimal::ZERO)
}
