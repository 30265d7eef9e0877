use crate::library::logger::interface::{LogResult, Logger};
use chrono::Utc;
use std::io::Write;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoggerConsole {
    namespace: Option<String>,
    timezone: chrono::FixedOffset,
}

impl LoggerConsole {
    pub fn new(timezone: chrono::FixedOffset) -> Self {
        Self {
            namespace: None,
            timezone,
        }
    }

    fn format_line(&self, level: &str, message: &str) -> String {
        let local_time = Utc::now().with_timezone(&self.timezone);
        let formatted = local_time.format("%Y-%m-%d %I:%M:%S%.3f %p");
        match &self.namespace {
            Some(namespace) => format!("[{}] {} {}: {}", formatted, level, namespace, message),
            None => format!("[{}] {} {}", formatted, level, message),
        }
    }
}

impl Logger for LoggerConsole {
    fn info(&self, message: &str) -> LogResult {
        let line = self.format_line("INFO", message);
        writeln!(std::io::stdout().lock(), "{}", line)?;
        Ok(())
    }

    fn error(&self, message: &str) -> LogResult {
        let line = self.format_line("ERROR", message);
        writeln!(std::io::stderr().lock(), "{}", line)?;
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerConsole {
            namespace: Some(new_namespace),
            timezone: self.timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_namespaces_are_joined() {
        let logger = LoggerConsole {
            namespace: Some("app".to_string()),
            timezone: FixedOffset::east_opt(0).unwrap(),
        };

        let line = logger.format_line("INFO", "hello");
        assert!(line.ends_with("INFO app: hello"));

        let nested = LoggerConsole {
            namespace: Some("app:fetcher".to_string()),
            timezone: FixedOffset::east_opt(0).unwrap(),
        };
        assert!(nested.format_line("ERROR", "boom").ends_with("ERROR app:fetcher: boom"));
    }

    #[test]
    fn test_without_namespace() {
        let logger = LoggerConsole::new(FixedOffset::east_opt(9 * 3600).unwrap());
        assert!(logger.format_line("INFO", "ready").ends_with("] INFO ready"));
        assert!(logger.info("ready").is_ok());
    }
}
