//! Tabular module - CSV export and import of line items.

mod csv_parser;
mod tabular_codec;
mod tabular_model;

pub use tabular_codec::{
    decode, encode, export_file_name, ADDITIONAL_COSTS_HEADER, BASE_COST_HEADER, EXPORT_HEADERS,
    NAME_HEADER, RATE_HEADER,
};
pub use tabular_model::{
    ImportReport, ImportRowOutcome, RawImportRow, RejectReason, RejectedImportRow,
};
