//! Line item export and import tables.
//!
//! Export writes one row per line item with fixed Spanish headers and plain
//! numbers. Import resolves columns by exact header name and returns raw
//! inputs; pricing the imported rows is left to the caller so that the
//! current settings apply.

use chrono::NaiveDateTime;
use log::debug;
use rust_decimal::Decimal;

use super::csv_parser::{parse_csv, ParseConfig};
use super::tabular_model::{ImportRowOutcome, RawImportRow, RejectReason, RejectedImportRow};
use crate::constants::EXPORT_DECIMAL_PRECISION;
use crate::costs;
use crate::errors::{Error, Result, ValidationError};
use crate::line_items::LineItem;
use crate::pricing::parse_decimal_tolerant;

/// Import header for the item name
pub const NAME_HEADER: &str = "nombre";
/// Import header for the base cost
pub const BASE_COST_HEADER: &str = "costo_base";
/// Optional import header for the margin or markup rate
pub const RATE_HEADER: &str = "margen";
/// Optional import header carrying an already summed additional cost
pub const ADDITIONAL_COSTS_HEADER: &str = "costos_adicionales";

const EXPORT_NAME: &str = "Nombre";
const EXPORT_BASE_COST: &str = "Costo Base";
const EXPORT_ADDITIONAL_COSTS: &str = "Costos Adicionales";
const EXPORT_INPUT_RATE: &str = "Margen Ingresado %";

/// Export columns: the name, then every breakdown field in declaration order.
pub const EXPORT_HEADERS: [&str; 14] = [
    EXPORT_NAME,
    EXPORT_BASE_COST,
    EXPORT_ADDITIONAL_COSTS,
    "Costo Total",
    "Precio Neto",
    "IVA",
    "Precio Final",
    "Ganancia",
    EXPORT_INPUT_RATE,
    "Margen Real Ventas %",
    "Markup Real Costo %",
    "Descuento Máximo %",
    "Método Cálculo",
    "Tasa IVA %",
];

/// Writes line items as CSV text, header row first.
pub fn encode(items: &[LineItem]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADERS)?;

    for item in items {
        let b = &item.breakdown;
        writer.write_record([
            item.name.clone(),
            plain(b.base_cost),
            plain(b.additional_costs),
            plain(b.total_cost),
            plain(b.net_price),
            plain(b.tax_amount),
            plain(b.gross_price),
            plain(b.profit),
            plain(b.input_rate),
            plain(b.real_margin_on_sales),
            plain(b.real_markup_on_cost),
            plain(b.max_discount_percent),
            b.method.as_str().to_string(),
            plain(b.tax_rate),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(e.error().to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Csv(e.to_string()))
}

/// File name for a download created at `timestamp`.
pub fn export_file_name(timestamp: NaiveDateTime) -> String {
    format!(
        "precios_calculados_{}.csv",
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// Reads an import table into one outcome per data row.
///
/// Fails only when the table itself cannot be read or has no data rows.
/// Rows without a name or without a positive base cost, and every row of a
/// table lacking the `nombre`/`costo_base` columns, are reported as rejected.
pub fn decode(content: &[u8], default_rate: Decimal) -> Result<Vec<ImportRowOutcome>> {
    let table = parse_csv(content, &ParseConfig::default())?;
    if table.rows.is_empty() {
        return Err(
            ValidationError::InvalidInput("CSV file has no data rows".to_string()).into(),
        );
    }
    for warning in &table.warnings {
        log::warn!("Import table: {}", warning);
    }

    let layout = ColumnLayout::resolve(&table.headers);
    debug!(
        "Resolved import columns {:?} from {:?} (delimiter {:?})",
        layout, table.headers, table.delimiter
    );

    let outcomes: Vec<ImportRowOutcome> = table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, cells)| decode_row(idx + 1, cells, &layout, default_rate))
        .collect();

    debug!(
        "Decoded {} rows, {} accepted",
        outcomes.len(),
        outcomes.iter().filter(|o| o.is_accepted()).count()
    );
    Ok(outcomes)
}

/// Column positions of the recognized headers.
#[derive(Debug, Default)]
struct ColumnLayout {
    name: Option<usize>,
    base_cost: Option<usize>,
    rate: Option<usize>,
    costs: Vec<usize>,
}

impl ColumnLayout {
    fn resolve(headers: &[String]) -> Self {
        let mut layout = ColumnLayout::default();
        for (idx, header) in headers.iter().enumerate() {
            match header.as_str() {
                NAME_HEADER | EXPORT_NAME => first(&mut layout.name, idx),
                BASE_COST_HEADER | EXPORT_BASE_COST => first(&mut layout.base_cost, idx),
                RATE_HEADER | EXPORT_INPUT_RATE => first(&mut layout.rate, idx),
                ADDITIONAL_COSTS_HEADER | EXPORT_ADDITIONAL_COSTS => layout.costs.push(idx),
                other if costs::is_cost_field(other) => layout.costs.push(idx),
                _ => {}
            }
        }
        layout
    }
}

fn first(slot: &mut Option<usize>, idx: usize) {
    if slot.is_none() {
        *slot = Some(idx);
    }
}

fn decode_row(
    row: usize,
    cells: &[String],
    layout: &ColumnLayout,
    default_rate: Decimal,
) -> ImportRowOutcome {
    let cell = |idx: usize| cells.get(idx).map(String::as_str).unwrap_or("");
    let reject = |name: Option<String>, reason: RejectReason| {
        ImportRowOutcome::Rejected(RejectedImportRow { row, name, reason })
    };

    let (Some(name_idx), Some(base_cost_idx)) = (layout.name, layout.base_cost) else {
        return reject(None, RejectReason::MissingRequiredColumn);
    };

    let name = cell(name_idx).trim();
    if name.is_empty() {
        return reject(None, RejectReason::BlankName);
    }
    let name = name.to_string();

    let base_cost = match parse_decimal_tolerant(cell(base_cost_idx)) {
        Some(value) if value > Decimal::ZERO => value,
        Some(_) => return reject(Some(name), RejectReason::NonPositiveBaseCost),
        None => return reject(Some(name), RejectReason::InvalidBaseCost),
    };

    let rate = layout
        .rate
        .and_then(|idx| parse_decimal_tolerant(cell(idx)))
        .unwrap_or(default_rate);

    let additional_costs = layout
        .costs
        .iter()
        .filter_map(|&idx| parse_decimal_tolerant(cell(idx)))
        .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount));

    ImportRowOutcome::Accepted(RawImportRow {
        row,
        name,
        base_cost,
        additional_costs,
        rate,
    })
}

fn plain(value: Decimal) -> String {
    value
        .round_dp(EXPORT_DECIMAL_PRECISION)
        .normalize()
        .to_string()
}
