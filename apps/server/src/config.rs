use std::{net::SocketAddr, str::FromStr, time::Duration};

use pricewise_core::{
    pricing::{parse_decimal_tolerant, CalculationMethod},
    Settings, SettingsUpdate,
};
use rust_decimal::Decimal;

const DEFAULT_LISTEN_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);
const DEFAULT_TIMEOUT_MS: u64 = 30000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Pricing settings the process starts with
    pub initial_settings: Settings,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source. Invalid values
    /// fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let listen_addr = lookup("PW_LISTEN_ADDR")
            .and_then(|raw| match raw.parse::<SocketAddr>() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    tracing::warn!("Invalid PW_LISTEN_ADDR '{}': {}", raw, e);
                    None
                }
            })
            .unwrap_or_else(|| SocketAddr::from(DEFAULT_LISTEN_ADDR));

        let cors_allow = lookup("PW_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout_ms: u64 = lookup("PW_REQUEST_TIMEOUT_MS")
            .and_then(|raw| match raw.trim().parse() {
                Ok(ms) => Some(ms),
                Err(_) => {
                    tracing::warn!("Invalid PW_REQUEST_TIMEOUT_MS '{}'", raw);
                    None
                }
            })
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            initial_settings: initial_settings(&lookup),
        }
    }
}

/// Reads `PW_TAX_RATE`, `PW_DEFAULT_RATE` and `PW_METHOD`. Each value is
/// checked on its own and replaced by its default when invalid.
fn initial_settings(lookup: &impl Fn(&str) -> Option<String>) -> Settings {
    let tax_rate = decimal_var(lookup, "PW_TAX_RATE").map(|v| SettingsUpdate {
        tax_rate: Some(v),
        ..Default::default()
    });
    let default_rate = decimal_var(lookup, "PW_DEFAULT_RATE").map(|v| SettingsUpdate {
        default_rate: Some(v),
        ..Default::default()
    });
    let method = lookup("PW_METHOD").and_then(|raw| match CalculationMethod::from_str(&raw) {
        Ok(method) => Some(method),
        Err(e) => {
            tracing::warn!("Ignoring PW_METHOD: {}", e);
            None
        }
    });

    Settings::default().merged(&SettingsUpdate {
        tax_rate: tax_rate
            .filter(|u| in_range("PW_TAX_RATE", u))
            .and_then(|u| u.tax_rate),
        default_rate: default_rate
            .filter(|u| in_range("PW_DEFAULT_RATE", u))
            .and_then(|u| u.default_rate),
        method,
    })
}

fn decimal_var(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Option<Decimal> {
    let raw = lookup(var)?;
    let value = parse_decimal_tolerant(&raw);
    if value.is_none() {
        tracing::warn!("Ignoring {}: '{}' is not a number", var, raw);
    }
    value
}

fn in_range(var: &str, update: &SettingsUpdate) -> bool {
    match Settings::default().merged(update).validate() {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", var, e);
            false
        }
    }
}
