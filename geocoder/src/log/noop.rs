//! No-operation logger implementation.

use crate::log::{LogContext, LogLevel, Logger};

/// A logger that discards all messages.
///
/// This is what a [`Chain`](crate::provider::Chain) uses until a real sink
/// is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _message: &str, _context: &LogContext) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpLogger>();
    }

    #[test]
    fn test_noop_logger_as_trait_object() {
        let logger: Box<dyn Logger> = Box::new(NoOpLogger);
        logger.info("test message", &[]);
        logger.alert("alert message", &[("key", "value".to_string())]);
    }
}
