use std::sync::RwLock;

use log::{debug, warn};

use super::SettingsServiceTrait;
use crate::errors::Result;
use crate::settings::{Settings, SettingsUpdate};

/// In-memory settings holder. Settings live for the lifetime of the process.
pub struct SettingsService {
    settings: RwLock<Settings>,
}

impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        let settings = self.settings.read()?;
        Ok(*settings)
    }

    fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings> {
        let mut settings = self.settings.write()?;
        let candidate = settings.merged(update);

        if let Err(e) = candidate.validate() {
            warn!("Rejected settings update {:?}: {}", update, e);
            return Err(e);
        }

        debug!("Settings updated: {:?} -> {:?}", *settings, candidate);
        *settings = candidate;
        Ok(candidate)
    }
}

impl SettingsService {
    /// Creates the service with `initial` settings, falling back to the
    /// defaults when `initial` is out of range.
    pub fn new(initial: Settings) -> Self {
        let settings = match initial.validate() {
            Ok(()) => initial,
            Err(e) => {
                warn!("Invalid initial settings ({}); using defaults", e);
                Settings::default()
            }
        };
        SettingsService {
            settings: RwLock::new(settings),
        }
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        SettingsService::new(Settings::default())
    }
}
