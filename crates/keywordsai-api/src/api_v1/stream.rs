use serde_json::Value;

use crate::error::KeywordsAiError;

/// Collect a server-sent-events body into a JSON array of chunks.
///
/// Only `data:` lines are considered; the `[DONE]` sentinel ends the stream.
/// Each item still yields exactly one output this way, even when the caller
/// asked for `stream: true`.
pub fn collect_event_stream(raw: &[u8]) -> Result<Value, KeywordsAiError> {
    let text = std::str::from_utf8(raw)?;
    let mut chunks = Vec::new();

    for line in text.lines() {
        let Some(data) = line.strip_prefix("data:") else {
            continue;
        };
        let data = data.trim();
        if data == "[DONE]" {
            break;
        }
        if data.is_empty() {
            continue;
        }
        chunks.push(serde_json::from_str(data)?);
    }

    Ok(Value::Array(chunks))
}
