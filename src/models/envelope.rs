use serde::Deserialize;
use serde_json::Value;

/// Response wrapper used by every portal endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    /// Older endpoints answer with `success` instead of `status`
    #[serde(default, alias = "success")]
    pub status: bool,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Server message, if it carries any text
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Reads a loosely typed status flag. `true`, non-zero numbers and the
/// strings `"true"` / `"1"` are set; everything else is not.
pub fn status_flag(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_flag_accepts_truthy_values() {
        for value in [json!(true), json!(1), json!(2.5), json!("true"), json!("TRUE"), json!("1")] {
            assert!(status_flag(&value), "{} should be set", value);
        }
        for value in [json!(false), json!(0), json!("false"), json!("0"), json!(""), json!(null), json!([])] {
            assert!(!status_flag(&value), "{} should not be set", value);
        }
    }
}
