//! Logger trait definition.

use std::fmt;
use std::str::FromStr;

/// Key/value pairs attached to a log entry, in insertion order.
pub type LogContext = [(&'static str, String)];

/// Log level for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Verbose debugging information
    Trace,
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
    /// Action must be taken immediately, e.g. a whole provider is down
    Alert,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Alert => "alert",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "alert" => Ok(LogLevel::Alert),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Logging sink for decorators and adapters.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one sink can be shared by
/// providers called from several threads.
pub trait Logger: Send + Sync {
    /// Log a message template at the specified level.
    ///
    /// The convenience methods delegate to this method.
    fn log(&self, level: LogLevel, message: &str, context: &LogContext);

    fn trace(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Trace, message, context);
    }

    fn debug(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Debug, message, context);
    }

    fn info(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Info, message, context);
    }

    fn warn(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Warn, message, context);
    }

    fn error(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Error, message, context);
    }

    fn alert(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Alert, message, context);
    }
}

/// Replaces every `{key}` in `template` with its value from `context`.
///
/// Placeholders without a matching key are left as they are.
pub fn interpolate(template: &str, context: &LogContext) -> String {
    let mut rendered = template.to_string();
    for (key, value) in context {
        rendered = rendered.replace(&format!("{{{}}}", key), value);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Error < LogLevel::Alert);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("alert".parse::<LogLevel>(), Ok(LogLevel::Alert));
        assert_eq!(" WARNING ".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_display_round_trips() {
        for level in [LogLevel::Trace, LogLevel::Error, LogLevel::Alert] {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_interpolate() {
        let context = [
            ("provider_name", "bing_maps".to_string()),
            ("address", "10 avenue Gambetta".to_string()),
        ];
        assert_eq!(
            interpolate(
                "Provider \"{provider_name}\" could not geocode address: \"{address}\".",
                &context
            ),
            "Provider \"bing_maps\" could not geocode address: \"10 avenue Gambetta\"."
        );
        assert_eq!(interpolate("{missing} stays", &context), "{missing} stays");
    }
}
