//! One-line JSON log events for the browser console.

use serde::Deserialize;
use std::cmp::Ordering;

pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    /// Case-insensitive; anything unrecognised falls back to `default`.
    pub fn parse_or(value: &str, default: LogLevel) -> LogLevel {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            _ => default,
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = std::convert::Infallible;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(Self::parse_or(&value, DEFAULT_LOG_LEVEL))
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        DEFAULT_LOG_LEVEL
    }
}

/// Level-gated event writer, handed to every component that logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Logger {
    min_level: LogLevel,
}

impl Logger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn log_event(&self, level: LogLevel, event: &str, fields: serde_json::Value) {
        if !self.enabled(level) {
            return;
        }

        emit(&event_payload(now_unix_millis(), level, event, fields).to_string());
    }

    pub fn info(&self, event: &str, fields: serde_json::Value) {
        self.log_event(LogLevel::Info, event, fields);
    }

    pub fn debug(&self, event: &str, fields: serde_json::Value) {
        self.log_event(LogLevel::Debug, event, fields);
    }
}

fn event_payload(
    ts: u64,
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts)),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    println!("{line}");
}

// `SystemTime::now` panics on wasm32-unknown-unknown.
#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_puts_fixed_fields_before_extras() {
        let payload = event_payload(42, LogLevel::Info, "theme_applied", json!({ "theme": "nord" }));

        assert_eq!(payload["ts"], 42);
        assert_eq!(payload["level"], "info");
        assert_eq!(payload["event"], "theme_applied");
        assert_eq!(payload["theme"], "nord");
    }

    #[test]
    fn non_object_fields_are_dropped() {
        let payload = event_payload(1, LogLevel::Debug, "tick", json!([1, 2, 3]));
        let object = payload.as_object().expect("payload is an object");

        assert_eq!(object.len(), 3);
    }

    #[test]
    fn info_logger_filters_debug() {
        let logger = Logger::new(LogLevel::Info);

        assert!(logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(Logger::new(LogLevel::Debug).enabled(LogLevel::Debug));
    }

    #[test]
    fn level_parsing_is_lenient() {
        assert_eq!(LogLevel::parse_or(" DEBUG ", LogLevel::Info), LogLevel::Debug);
        assert_eq!(LogLevel::parse_or("verbose", LogLevel::Info), LogLevel::Info);

        let parsed: LogLevel = serde_json::from_str("\"Info\"").expect("level deserializes");
        assert_eq!(parsed, LogLevel::Info);
    }
}
