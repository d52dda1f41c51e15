//! Portfolio summary models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate figures over all line items. Derived on demand, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub item_count: usize,
    pub total_base_cost: Decimal,
    pub total_additional_costs: Decimal,
    /// Total invested: the sum of every item's total cost
    pub total_cost: Decimal,
    pub total_net_price: Decimal,
    pub total_tax_amount: Decimal,
    pub total_gross_price: Decimal,
    pub total_profit: Decimal,
    pub average_margin_on_sales: Decimal,
    pub average_max_discount_percent: Decimal,
    /// `(total_gross_price / total_cost - 1) * 100`
    pub roi: Decimal,
    /// Mean break-even price per item
    pub average_min_price: Decimal,
}
