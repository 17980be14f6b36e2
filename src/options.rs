//! Generator option state
//!
//! A string-keyed option map owned by the surrounding configuration
//! system. The fragment store consults it for conditional fragment
//! lookup and the output layer reads the `output-encoding` value from
//! it; neither component owns the state.

use std::collections::HashMap;

/// Name of the option selecting the output file encoding
pub const OUTPUT_ENCODING_OPTION: &str = "output-encoding";

/// Enumerated generator options as name/value pairs
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    values: HashMap<String, String>,
}

impl GeneratorOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option value, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get an option value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Check if an option is set to exactly `value`
    pub fn is_set(&self, name: &str, value: &str) -> bool {
        self.get(name) == Some(value)
    }
}
