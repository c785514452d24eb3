//! Tracing library adapter implementation.

use crate::log::{interpolate, LogContext, LogLevel, Logger};

/// Logger implementation that delegates to the `tracing` crate.
///
/// The template is rendered with its context, and the raw context is
/// attached as a `context` field. `tracing` has no alert level, so alerts
/// are emitted as errors tagged `alert = true`.
///
/// ```ignore
/// use geocoder::log::{Logger, TracingLogger};
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already initialized
/// let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

fn render_context(context: &LogContext) -> String {
    context
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, context: &LogContext) {
        let message = interpolate(message, context);
        let context = render_context(context);
        match level {
            LogLevel::Trace => tracing::trace!(context = %context, "{}", message),
            LogLevel::Debug => tracing::debug!(context = %context, "{}", message),
            LogLevel::Info => tracing::info!(context = %context, "{}", message),
            LogLevel::Warn => tracing::warn!(context = %context, "{}", message),
            LogLevel::Error => tracing::error!(context = %context, "{}", message),
            LogLevel::Alert => tracing::error!(alert = true, context = %context, "{}", message),
        }
    }
}
