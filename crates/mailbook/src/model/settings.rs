//! Settings model.

use crate::style::palette::ThemeMode;

/// Default backend base URL: the development backend port, matching the
/// dev proxy target of the original deployment.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8083";

/// State for the settings screen.
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// Base URL as currently typed, applied only on submit.
    pub base_url_input: String,
    /// Feedback line (applied, invalid URL, save failure).
    pub feedback: Option<String>,
}

/// Application settings that persist across sessions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AppSettings {
    /// Backend base URL.
    pub base_url: String,
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            theme_mode: ThemeMode::Light,
        }
    }
}

/// Serde helpers for `ThemeMode` (since it doesn't derive `Serialize`/`Deserialize`).
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "dark" => Ok(ThemeMode::Dark),
            _ => Ok(ThemeMode::Light),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip() {
        let settings = AppSettings {
            base_url: "http://localhost:3000/api/".into(),
            theme_mode: ThemeMode::Dark,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.base_url, settings.base_url);
        assert_eq!(back.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_falls_back_to_light() {
        let back: AppSettings =
            serde_json::from_str(r#"{"base_url":"http://x.test","theme_mode":"neon"}"#).unwrap();
        assert_eq!(back.theme_mode, ThemeMode::Light);
    }
}
