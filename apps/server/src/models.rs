use pricewise_core::{
    pricing::MarkupMarginGap,
    utils::{format_currency, format_percent},
    PortfolioSummary, PriceBreakdown,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A priced preview plus the hints shown next to it.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PricePreview {
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
    /// Gross price after the maximum discount
    pub break_even_price: Decimal,
    /// Present when a markup overstates the real margin on sales
    pub markup_margin_gap: Option<MarkupMarginGap>,
}

impl From<PriceBreakdown> for PricePreview {
    fn from(breakdown: PriceBreakdown) -> Self {
        Self {
            break_even_price: breakdown.break_even_price(),
            markup_margin_gap: breakdown.markup_margin_gap(),
            breakdown,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDisplay {
    pub total_cost: String,
    pub total_net_price: String,
    pub total_tax_amount: String,
    pub total_gross_price: String,
    pub total_profit: String,
    pub average_margin_on_sales: String,
    pub average_max_discount_percent: String,
    pub roi: String,
    pub average_min_price: String,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: PortfolioSummary,
    pub display: SummaryDisplay,
}

impl From<PortfolioSummary> for SummaryResponse {
    fn from(summary: PortfolioSummary) -> Self {
        let display = SummaryDisplay {
            total_cost: format_currency(summary.total_cost),
            total_net_price: format_currency(summary.total_net_price),
            total_tax_amount: format_currency(summary.total_tax_amount),
            total_gross_price: format_currency(summary.total_gross_price),
            total_profit: format_currency(summary.total_profit),
            average_margin_on_sales: format_percent(summary.average_margin_on_sales),
            average_max_discount_percent: format_percent(summary.average_max_discount_percent),
            roi: format_percent(summary.roi),
            average_min_price: format_currency(summary.average_min_price),
        };
        Self { summary, display }
    }
}
