/// Sink for diagnostics raised by [`crate::config::SettingsIo`].
///
/// Passed in at construction so callers decide where messages go.
pub trait Diagnostics {
    fn debug(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards to the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "tmc_cli::settings", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "tmc_cli::settings", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "tmc_cli::settings", "{message}");
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn debug(&self, message: &str) {
        (**self).debug(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
