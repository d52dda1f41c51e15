//! Pricewise Core - pricing calculation, line item store and CSV exchange.
//!
//! This crate contains the business logic of the pricing calculator. It
//! keeps everything in memory and exposes services that the server (or any
//! other front end) drives.

pub mod constants;
pub mod costs;
pub mod errors;
pub mod line_items;
pub mod portfolio;
pub mod pricing;
pub mod settings;
pub mod tabular;
pub mod utils;

// Re-export the types most callers need
pub use line_items::{LineItem, LineItemStore, NewLineItem};
pub use portfolio::PortfolioSummary;
pub use pricing::{CalculationMethod, PriceBreakdown, PricingService, PricingServiceTrait};
pub use settings::{Settings, SettingsService, SettingsServiceTrait, SettingsUpdate};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
