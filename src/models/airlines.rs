//! Airline name directory
//!
//! Maps IATA carrier codes to display names. The directory is built once
//! from the built-in entries plus any configured overrides and never
//! changes afterwards.

use std::collections::BTreeMap;

use serde::Serialize;
use tabled::Tabled;

use crate::output::PrettyLine;

const BUILTIN_AIRLINES: &[(&str, &str)] = &[
    ("AA", "American Airlines"),
    ("UA", "United Airlines"),
    ("BA", "British Airways"),
    ("IB", "Iberia"),
    ("LH", "Lufthansa"),
    ("AF", "Air France"),
    ("KL", "KLM"),
];

/// Immutable carrier code → airline name lookup
#[derive(Debug, Clone, PartialEq)]
pub struct AirlineDirectory {
    names: BTreeMap<String, String>,
}

impl Default for AirlineDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AirlineDirectory {
    /// Directory with the built-in carriers only
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_AIRLINES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }

    /// Add or replace entries. Codes are trimmed and upper-cased.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (code, name) in overrides {
            self.names
                .insert(code.as_ref().trim().to_ascii_uppercase(), name.into());
        }
        self
    }

    /// Display name for `code`, or the code itself when unknown.
    pub fn name_for<'a>(&'a self, code: &'a str) -> &'a str {
        self.names.get(code).map(String::as_str).unwrap_or(code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Entries sorted by code, ready for display
    pub fn entries(&self) -> Vec<AirlineDisplay> {
        self.names
            .iter()
            .map(|(code, name)| AirlineDisplay {
                code: code.clone(),
                name: name.clone(),
            })
            .collect()
    }
}

/// Airline display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AirlineDisplay {
    #[tabled(rename = "CODE")]
    pub code: String,

    #[tabled(rename = "AIRLINE")]
    pub name: String,
}

impl PrettyLine for AirlineDisplay {
    fn pretty_line(&self) -> String {
        format!("{}  {}", self.code, self.name)
    }
}
