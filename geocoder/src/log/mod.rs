//! Logging abstraction layer.
//!
//! Decorators that swallow failures (notably [`Chain`](crate::provider::Chain))
//! report them through an injected [`Logger`] instead of a global logger.
//!
//! - `Logger` trait: the sink interface
//! - `TracingLogger`: production adapter that delegates to the `tracing` crate
//! - `NoOpLogger`: silent logger, the default when nothing is attached
//!
//! Messages are templates with `{key}` placeholders; the context carries the
//! values. Sinks that render text can use [`interpolate`].
//!
//! ```
//! use geocoder::log::{interpolate, LogLevel, Logger, NoOpLogger};
//! use std::sync::Arc;
//!
//! let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
//! let context = [("provider_name", "nominatim".to_string())];
//! logger.log(LogLevel::Alert, "Provider \"{provider_name}\" failed", &context);
//!
//! assert_eq!(
//!     interpolate("Provider \"{provider_name}\" failed", &context),
//!     "Provider \"nominatim\" failed"
//! );
//! ```

mod noop;
mod tracing_adapter;
mod r#trait;

pub use noop::NoOpLogger;
pub use r#trait::{interpolate, LogContext, LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
