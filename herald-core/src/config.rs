//! Mapping configuration for Herald
//!
//! The mapping file is TOML with two tables, each keyed by GitHub login:
//!
//! ```toml
//! [channel]
//! alice = "@alice:example.org"
//!
//! [direct_message]
//! bob = "@bob:example.org"
//! ```
//!
//! A legacy flat schema (top-level `login = "handle"` pairs, no tables) is
//! still accepted and populates the channel map only.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// Reviewer-to-Matrix identity mapping, loaded once per invocation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// GitHub login to Matrix handle for the shared channel message
    pub channel: BTreeMap<String, String>,

    /// GitHub login to Matrix handle for direct messages
    pub direct_message: BTreeMap<String, String>,
}

impl MappingConfig {
    /// Load the mapping from a TOML file
    ///
    /// A missing or unparsable file is fatal; the tool cannot notify
    /// anyone without its mapping.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::parse(&contents)
    }

    /// Parse mapping TOML, accepting both the nested and the legacy schema
    pub fn parse(contents: &str) -> Result<Self> {
        let table: toml::Table = contents
            .parse()
            .map_err(|e| Error::Config(format!("failed to parse mapping: {}", e)))?;

        if table.contains_key("channel") || table.contains_key("direct_message") {
            toml::Value::Table(table)
                .try_into()
                .map_err(|e| Error::Config(format!("invalid mapping schema: {}", e)))
        } else {
            Self::parse_legacy(table)
        }
    }

    /// Legacy flat schema: every top-level entry is `login = "handle"` and
    /// feeds the channel map; the direct-message map stays empty.
    fn parse_legacy(table: toml::Table) -> Result<Self> {
        let mut channel = BTreeMap::new();

        for (login, value) in table {
            match value {
                toml::Value::String(handle) => {
                    channel.insert(login, handle);
                }
                other => {
                    return Err(Error::Config(format!(
                        "invalid mapping schema: expected a string handle for '{}', got {}",
                        login,
                        other.type_str()
                    )));
                }
            }
        }

        Ok(Self {
            channel,
            direct_message: BTreeMap::new(),
        })
    }

    /// Look up the channel handle for a GitHub login
    pub fn map_for_channel(&self, login: &str) -> Option<&str> {
        self.channel.get(login).map(String::as_str)
    }

    /// Look up the direct-message handle for a GitHub login
    pub fn map_for_direct_message(&self, login: &str) -> Option<&str> {
        self.direct_message.get(login).map(String::as_str)
    }
}
