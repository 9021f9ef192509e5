use serde::Deserialize;

/// The host's stored credential record: a single secret API key.
///
/// `Debug` never prints the key.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub api_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_host_record_and_hides_the_key() {
        let credentials: Credentials =
            serde_json::from_value(serde_json::json!({"apiKey": "kw-secret"})).unwrap();
        assert_eq!(credentials.api_key, "kw-secret");
        assert!(!format!("{credentials:?}").contains("kw-secret"));
    }
}
