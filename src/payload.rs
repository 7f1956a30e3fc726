//! Request and Response Payloads
//!
//! Bodies exchanged with the backend. All of them are built fresh for a
//! single request and dropped afterwards.

use serde::{Deserialize, Serialize};

/// Slider midpoint, used as the reset value and as the fallback when the
/// slider holds something that is not a number.
pub const MOOD_MIDPOINT: f64 = 5.0;

/// A mood rating plus free-text description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: f64,
    pub description: String,
    pub timezone: String,
}

impl MoodEntry {
    pub fn new(mood: f64, description: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            mood,
            description: description.into(),
            timezone: timezone.into(),
        }
    }

    /// Build an entry from raw slider text
    pub fn from_slider(
        slider: &str,
        description: impl Into<String>,
        timezone: impl Into<String>,
    ) -> Self {
        Self::new(parse_mood(slider), description, timezone)
    }
}

/// Parse a slider value, falling back to the midpoint
pub fn parse_mood(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(MOOD_MIDPOINT)
}

/// Email/password pair for signup and login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            timezone: None,
        }
    }

    /// Attach the detected timezone
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

/// Body of `POST /set_timezone`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimezoneReport {
    pub timezone: String,
}

/// The `message` every endpoint answers with
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: String,
}

/// How the backend answered a login attempt
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// 2xx; the session cookie is set
    Accepted,
    /// Non-2xx with the server's explanation
    Rejected { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mood() {
        assert_eq!(parse_mood("7"), 7.0);
        assert_eq!(parse_mood(" 3.5 "), 3.5);
        assert_eq!(parse_mood(""), MOOD_MIDPOINT);
        assert_eq!(parse_mood("high"), MOOD_MIDPOINT);
        assert_eq!(parse_mood("NaN"), MOOD_MIDPOINT);
    }

    #[test]
    fn test_mood_entry_json_shape() {
        let entry = MoodEntry::from_slider("8", "Good run this morning", "Europe/Oslo");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["mood"], 8.0);
        assert_eq!(json["description"], "Good run this morning");
        assert_eq!(json["timezone"], "Europe/Oslo");
    }

    #[test]
    fn test_zero_mood_stays_numeric() {
        let entry = MoodEntry::from_slider("0", "Rough day", "UTC");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["mood"], serde_json::json!(0.0));
        assert!(json["mood"].is_number());
    }

    #[test]
    fn test_credentials_omit_missing_timezone() {
        let json = serde_json::to_string(&Credentials::new("a@b.c", "pw")).unwrap();
        assert!(!json.contains("timezone"));

        let json = serde_json::to_value(Credentials::new("a@b.c", "pw").with_timezone("UTC")).unwrap();
        assert_eq!(json["timezone"], "UTC");
    }

    #[test]
    fn test_server_message_without_field() {
        let msg: ServerMessage = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(msg.message, "");

        let msg: ServerMessage =
            serde_json::from_str(r#"{"message": "Timezone set successfully"}"#).unwrap();
        assert_eq!(msg.message, "Timezone set successfully");
    }
}
