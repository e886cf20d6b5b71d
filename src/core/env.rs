//! Environment sinks.
//!
//! Injection writes upper-cased keys into an [`EnvSink`]. The process
//! environment, a child [`Command`] and a plain map are all sinks, which keeps
//! tests away from the real process environment.

use std::collections::BTreeMap;
use std::process::Command;

/// Anything that accepts environment variable assignments.
pub trait EnvSink {
    /// Set `key` to `value`, replacing any existing value.
    fn set_var(&mut self, key: &str, value: &str);
}

/// The current process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSink for ProcessEnv {
    fn set_var(&mut self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

impl EnvSink for Command {
    fn set_var(&mut self, key: &str, value: &str) {
        self.env(key, value);
    }
}

impl EnvSink for BTreeMap<String, String> {
    fn set_var(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

/// Environment variable name for a merged secret key.
pub fn env_key(key: &str) -> String {
    key.to_uppercase()
}

/// Render pairs in `.env` format, one `KEY=value` per line.
///
/// Quotes and escapes values that contain whitespace or .env-special chars.
pub fn to_env_string<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut output = String::new();

    for (key, value) in pairs {
        if needs_quotes(value) {
            output.push_str(&format!("{}=\"{}\"\n", key, escape_env_value(value)));
        } else {
            output.push_str(&format!("{}={}\n", key, value));
        }
    }

    output
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.chars().any(|ch| ch.is_whitespace())
        || value.contains('#')
        || value.contains('=')
        || value.contains('"')
        || value.contains('\'')
        || value.contains('\\')
}

fn escape_env_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
