//! Import/export table models.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// Inputs recovered from one accepted import row, ready to be priced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImportRow {
    /// 1-based index among the data rows
    pub row: usize,
    pub name: String,
    pub base_cost: Decimal,
    pub additional_costs: Decimal,
    pub rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedImportRow {
    /// 1-based index among the data rows
    pub row: usize,
    pub name: Option<String>,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    /// The table has no name or no base cost column
    MissingRequiredColumn,
    BlankName,
    InvalidBaseCost,
    NonPositiveBaseCost,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            RejectReason::MissingRequiredColumn => "required column 'nombre' or 'costo_base' is missing",
            RejectReason::BlankName => "name is blank",
            RejectReason::InvalidBaseCost => "base cost is not a number",
            RejectReason::NonPositiveBaseCost => "base cost must be positive",
        };
        f.write_str(message)
    }
}

/// What happened to one data row of an imported table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ImportRowOutcome {
    Accepted(RawImportRow),
    Rejected(RejectedImportRow),
}

impl ImportRowOutcome {
    pub fn row(&self) -> usize {
        match self {
            ImportRowOutcome::Accepted(raw) => raw.row,
            ImportRowOutcome::Rejected(rejected) => rejected.row,
        }
    }

    pub fn accepted(&self) -> Option<&RawImportRow> {
        match self {
            ImportRowOutcome::Accepted(raw) => Some(raw),
            ImportRowOutcome::Rejected(_) => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted().is_some()
    }
}

/// Result of importing a table into the line item store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Number of rows appended to the store
    pub accepted: usize,
    pub rejected: usize,
    /// Per-row outcomes, in table order
    pub rows: Vec<ImportRowOutcome>,
}

impl ImportReport {
    pub fn from_outcomes(rows: Vec<ImportRowOutcome>) -> Self {
        let accepted = rows.iter().filter(|o| o.is_accepted()).count();
        ImportReport {
            accepted,
            rejected: rows.len() - accepted,
            rows,
        }
    }
}
