//! Settings source backed by process environment variables.

use crate::port::SettingsSource;

/// [`SettingsSource`] reading from the process environment, for hosts that
/// surface plugin settings as environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

impl EnvSettings {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SettingsSource for EnvSettings {
    fn get_setting(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
