use keywordsai_core::options::OptionEntry;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::{Map, Number, Value};

/// One record of `GET /prompts/`. Only the fields the node needs are
/// decoded; everything else is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PromptRecord {
    pub prompt_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl PromptRecord {
    /// The prompt's name, or its id when the name is missing or empty.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.prompt_id)
    }
}

impl From<PromptRecord> for OptionEntry {
    fn from(value: PromptRecord) -> Self {
        OptionEntry::new(value.display_name().to_owned(), value.prompt_id)
    }
}

/// One record of `GET /prompts/{id}/versions/`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct VersionRecord {
    #[serde(deserialize_with = "integral_number")]
    pub version: i64,
    /// Set on the version currently deployed as live.
    #[serde(default)]
    pub readonly: Option<bool>,
}

impl VersionRecord {
    pub fn is_live(&self) -> bool {
        self.readonly == Some(true)
    }

    pub fn label(&self) -> String {
        if self.is_live() {
            format!("Version {} (Live)", self.version)
        } else {
            format!("Version {}", self.version)
        }
    }
}

impl From<VersionRecord> for OptionEntry {
    fn from(value: VersionRecord) -> Self {
        OptionEntry::new(value.label(), value.version)
    }
}

/// Version numbers are plain JSON numbers; `2.0` is as good as `2`.
fn integral_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(D::Error::custom(format!("`{number}` is not an integral version"))),
    }
}

/// `GET /prompts/{id}/versions/{version}/`, reduced to the variable map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionDetail {
    /// Variable name → sample value, in the order the template declares them.
    #[serde(default)]
    pub variables: Option<Map<String, Value>>,
}

impl VersionDetail {
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().flat_map(|vars| vars.keys().map(String::as_str))
    }
}
