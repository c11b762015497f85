//! Settings lookup port for the host runtime.

/// Read-only access to host-supplied settings.
///
/// The host decides where values come from (environment variables, secrets
/// store, character file); this plugin only ever reads by key.
pub trait SettingsSource: Send + Sync {
    /// Return the raw value for `key`, or `None` when unset.
    fn get_setting(&self, key: &str) -> Option<String>;
}
