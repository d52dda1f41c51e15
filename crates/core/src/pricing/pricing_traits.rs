use crate::errors::Result;
use crate::line_items::{LineItem, NewLineItem};
use crate::portfolio::PortfolioSummary;
use crate::pricing::PriceBreakdown;
use crate::tabular::ImportReport;

/// Trait for pricing service operations
pub trait PricingServiceTrait: Send + Sync {
    /// Prices an item with the current settings without storing it.
    fn preview(&self, item: &NewLineItem) -> Result<PriceBreakdown>;
    /// Validates, prices and stores an item.
    fn commit(&self, item: NewLineItem) -> Result<LineItem>;
    /// Imports a CSV table, appending every accepted row.
    fn import(&self, content: &[u8]) -> Result<ImportReport>;
    /// The store as CSV text, or `None` when there is nothing to export.
    fn export(&self) -> Result<Option<String>>;
    fn items(&self) -> Result<Vec<LineItem>>;
    fn clear(&self) -> Result<()>;
    fn summary(&self) -> Result<PortfolioSummary>;
}
