//! Pricing module - the price calculation, its models, and the service
//! that runs the pricing pipeline.

mod pricing_calculator;
mod pricing_model;
mod pricing_service;
mod pricing_traits;

#[cfg(test)]
mod pricing_calculator_tests;

pub use pricing_calculator::{compute, compute_input};
pub use pricing_model::{
    coerce_f64, coerce_str, parse_decimal_tolerant, CalculationMethod, MarkupMarginGap,
    PriceBreakdown, PricingInput,
};
pub use pricing_service::PricingService;
pub use pricing_traits::PricingServiceTrait;
