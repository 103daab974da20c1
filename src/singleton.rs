//! Singleton: a single process-wide instance behind a lazy, race-free accessor.

use std::sync::OnceLock;

static SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Process-wide application settings. There is exactly one instance,
/// created on the first [`AppSettings::instance`] call and never dropped.
#[derive(Debug)]
pub struct AppSettings {
    theme: String,
    verbose: bool,
}

impl AppSettings {
    /// Returns the sole instance, initializing it on first access.
    pub fn instance() -> &'static AppSettings {
        SETTINGS.get_or_init(|| AppSettings {
            theme: "dark".to_string(),
            verbose: false,
        })
    }

    /// Returns the instance only if it has already been initialized.
    pub fn try_instance() -> Option<&'static AppSettings> {
        SETTINGS.get()
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn describe(&self) -> String {
        format!("settings ready (theme: {}, verbose: {})", self.theme, self.verbose)
    }
}

// ============================================================================
// Tests
// ============================================================================
