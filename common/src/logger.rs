use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, timestamp: &str, message: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        println!("{}", self.format_line(&timestamp, message));
    }
}

/// First call wins; later calls keep the existing prefix.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    } else {
        eprintln!("Logger not initialized, dropping: {}", message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_prefix() {
        let logger = Logger::new(Some("Game".to_string()));
        assert_eq!(
            logger.format_line("2026-01-02 03:04:05", "X wins"),
            "[2026-01-02 03:04:05][Game] X wins"
        );
    }

    #[test]
    fn test_line_without_prefix() {
        let logger = Logger::new(None);
        assert_eq!(
            logger.format_line("2026-01-02 03:04:05", "Draw"),
            "[2026-01-02 03:04:05] Draw"
        );
    }
}
