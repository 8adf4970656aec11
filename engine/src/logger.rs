use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

struct Logger {
    prefix: String,
}

impl Logger {
    fn write(&self, message: &str) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        if self.prefix.is_empty() {
            println!("[{}] {}", timestamp, message);
        } else {
            println!("[{}] [{}] {}", timestamp, self.prefix, message);
        }
    }
}

/// First call wins; later calls keep the original prefix.
pub fn init_logger(prefix: Option<&str>) {
    LOGGER.get_or_init(|| Logger {
        prefix: prefix.unwrap_or_default().to_string(),
    });
}

pub fn log(message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.write(message),
        None => eprintln!("(logger uninitialized) {}", message),
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
