use std::sync::Arc;

use log::{debug, info, warn};

use super::pricing_calculator::{compute, compute_input};
use super::pricing_model::{PriceBreakdown, PricingInput};
use super::pricing_traits::PricingServiceTrait;
use crate::costs;
use crate::errors::{Error, Result};
use crate::line_items::{LineItem, LineItemStore, NewLineItem};
use crate::portfolio::{summarize, PortfolioSummary};
use crate::settings::{Settings, SettingsServiceTrait};
use crate::tabular::{self, ImportReport, ImportRowOutcome};

/// Runs the pricing pipeline: validate, compute with the current settings,
/// store, and summarize on demand.
pub struct PricingService {
    settings_service: Arc<dyn SettingsServiceTrait>,
    store: Arc<LineItemStore>,
}

impl PricingService {
    pub fn new(settings_service: Arc<dyn SettingsServiceTrait>, store: Arc<LineItemStore>) -> Self {
        PricingService {
            settings_service,
            store,
        }
    }

    fn price(item: &NewLineItem, settings: &Settings) -> PriceBreakdown {
        let input = PricingInput {
            base_cost: item.base_cost,
            additional_costs: costs::sum_costs(&item.additional_costs),
            rate: item.rate.unwrap_or(settings.default_rate),
        };
        compute_input(&input, settings.tax_rate, settings.method)
    }
}

impl PricingServiceTrait for PricingService {
    fn preview(&self, item: &NewLineItem) -> Result<PriceBreakdown> {
        let settings = self.settings_service.get_settings()?;
        Ok(Self::price(item, &settings))
    }

    fn commit(&self, item: NewLineItem) -> Result<LineItem> {
        item.validate()?;
        let settings = self.settings_service.get_settings()?;

        let breakdown = Self::price(&item, &settings);
        let line_item = LineItem::new(item.name.trim(), breakdown);
        self.store.append(line_item.clone())?;

        info!("Committed line item '{}'", line_item.name);
        Ok(line_item)
    }

    fn import(&self, content: &[u8]) -> Result<ImportReport> {
        let settings = self.settings_service.get_settings()?;
        let outcomes = tabular::decode(content, settings.default_rate)?;

        let items: Vec<LineItem> = outcomes
            .iter()
            .filter_map(ImportRowOutcome::accepted)
            .map(|row| {
                LineItem::new(
                    row.name.clone(),
                    compute(
                        row.base_cost,
                        row.additional_costs,
                        row.rate,
                        settings.tax_rate,
                        settings.method,
                    ),
                )
            })
            .collect();

        let report = ImportReport::from_outcomes(outcomes);
        for outcome in &report.rows {
            if let ImportRowOutcome::Rejected(rejected) = outcome {
                debug!("Import row {} skipped: {}", rejected.row, rejected.reason);
            }
        }

        if items.is_empty() {
            warn!(
                "Import produced no line items ({} rows rejected)",
                report.rejected
            );
            return Err(Error::Import(
                "no line items could be imported".to_string(),
            ));
        }

        self.store.append_all(items)?;
        info!(
            "Imported {} line items, {} rows rejected",
            report.accepted, report.rejected
        );
        Ok(report)
    }

    fn export(&self) -> Result<Option<String>> {
        let items = self.store.all()?;
        if items.is_empty() {
            return Ok(None);
        }
        tabular::encode(&items).map(Some)
    }

    fn items(&self) -> Result<Vec<LineItem>> {
        self.store.all()
    }

    fn clear(&self) -> Result<()> {
        self.store.clear()
    }

    fn summary(&self) -> Result<PortfolioSummary> {
        let items = self.store.all()?;
        Ok(summarize(&items))
    }
}
