use std::sync::Arc;

use crate::config::Config;
use pricewise_core::{
    LineItemStore, PricingService, PricingServiceTrait, SettingsService, SettingsServiceTrait,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub settings_service: Arc<dyn SettingsServiceTrait + Send + Sync>,
    pub pricing_service: Arc<dyn PricingServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let settings_service = Arc::new(SettingsService::new(config.initial_settings));
    let settings = settings_service.get_settings()?;
    tracing::info!(
        "Pricing with tax rate {}%, default rate {}%, method {}",
        settings.tax_rate,
        settings.default_rate,
        settings.method
    );

    let store = Arc::new(LineItemStore::new());
    let pricing_service = Arc::new(PricingService::new(settings_service.clone(), store));

    Ok(Arc::new(AppState {
        settings_service,
        pricing_service,
    }))
}
