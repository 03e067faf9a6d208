use ai_llm_service::ChatMessage;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Request payload for `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// What the user typed.
    pub message: String,
    /// Earlier turns, forwarded to the model as-is. Roles other than
    /// `system`/`user`/`assistant` fail deserialization.
    #[serde(default)]
    pub history: Option<Vec<ChatMessage>>,
    /// Label predicted by the client-side image classifier.
    #[serde(default)]
    pub wound_label: Option<String>,
    /// Classifier confidence in `[0, 1]`; a number or a numeric string.
    #[serde(default, deserialize_with = "lenient_probability")]
    pub wound_prob: Option<f64>,
}

/// Accepts `0.92` or `"0.92"`; anything else (null, bool, text, non-finite) is `None`.
fn lenient_probability<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(de)?;
    let value = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}
