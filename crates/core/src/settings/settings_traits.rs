//! Service traits for settings.

use crate::errors::Result;
use crate::settings::{Settings, SettingsUpdate};

/// Read/write access to the pricing configuration.
pub trait SettingsServiceTrait: Send + Sync {
    /// Get the current settings.
    fn get_settings(&self) -> Result<Settings>;

    /// Apply a partial update. Invalid values leave the settings unchanged.
    fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings>;
}
