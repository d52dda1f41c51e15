//! Portfolio module - aggregate statistics over the line item store.

mod summary_calculator;
mod summary_model;

pub use summary_calculator::summarize;
pub use summary_model::PortfolioSummary;
