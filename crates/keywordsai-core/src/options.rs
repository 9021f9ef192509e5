//! Selectable values produced by the option loaders.
//!
//! The host UI calls one of the three load-options methods whenever a
//! dependent dropdown needs refreshing. Entries are regenerated on every
//! query and never stored.
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NodeError;

/// Version alias understood by the gateway. It is offered as the first
/// version option even though no such record exists remotely.
pub const LATEST_VERSION: &str = "latest";

/// Display label of the synthetic [`LATEST_VERSION`] option.
pub const LATEST_VERSION_LABEL: &str = "Latest (Draft)";

/// One selectable entry of a dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionEntry {
    /// Label rendered by the host.
    pub name: String,
    pub value: OptionValue,
}

impl OptionEntry {
    pub fn new(name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The `Latest (Draft)` entry that heads every version list.
    pub fn latest_version() -> Self {
        Self::new(LATEST_VERSION_LABEL, LATEST_VERSION)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value)
    }
}

impl Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{n}"),
            OptionValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// The three load-options methods the node registers with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOptionsMethod {
    GetPrompts,
    GetVersions,
    GetVariables,
}

impl LoadOptionsMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadOptionsMethod::GetPrompts => "getPrompts",
            LoadOptionsMethod::GetVersions => "getVersions",
            LoadOptionsMethod::GetVariables => "getVariables",
        }
    }
}

impl FromStr for LoadOptionsMethod {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "getPrompts" => Ok(LoadOptionsMethod::GetPrompts),
            "getVersions" => Ok(LoadOptionsMethod::GetVersions),
            "getVariables" => Ok(LoadOptionsMethod::GetVariables),
            other => Err(NodeError::Invalid(format!(
                "unknown load-options method `{other}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_values_serialize_untagged() {
        let entries = vec![
            OptionEntry::latest_version(),
            OptionEntry::new("Version 2 (Live)", 2),
        ];
        let json = serde_json::to_value(&entries).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"name": "Latest (Draft)", "value": "latest"},
                {"name": "Version 2 (Live)", "value": 2}
            ])
        );
    }

    #[test]
    fn load_options_method_names_round_trip() {
        for method in [
            LoadOptionsMethod::GetPrompts,
            LoadOptionsMethod::GetVersions,
            LoadOptionsMethod::GetVariables,
        ] {
            assert_eq!(method.as_str().parse::<LoadOptionsMethod>().unwrap(), method);
        }
        assert!("getModels".parse::<LoadOptionsMethod>().is_err());
    }
}
