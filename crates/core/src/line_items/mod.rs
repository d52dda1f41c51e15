//! Line items module - priced items and their in-memory store.

mod line_items_model;
mod line_items_store;

pub use line_items_model::{LineItem, NewLineItem};
pub use line_items_store::LineItemStore;
