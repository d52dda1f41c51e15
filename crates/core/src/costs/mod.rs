//! Costs module - the ancillary cost catalog.

mod cost_catalog;
mod costs_model;

pub use cost_catalog::{all_fields, categories, field, is_cost_field, sum_costs, COST_CATEGORIES};
pub use costs_model::{CostCategory, CostField};
