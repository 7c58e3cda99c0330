//! Client-side state model.
//!
//! These types mirror the state the page keeps in the browser: the message
//! transcript and the display preferences. The defaults serialize into the
//! rendered page as its initial store; only the theme survives a reload.

use serde::{Deserialize, Deserializer, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person typing.
    User,
    /// The downstream service's reply.
    Bot,
}

/// A single chat message.
///
/// Appended to an ordered list for the page session, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

/// Light/dark visual preference, the only persisted setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Browser storage key holding the persisted theme.
    pub const STORAGE_KEY: &'static str = "theme";

    /// The exact string written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Chat font size in pixels, clamped to the control's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FontSize(u8);

impl FontSize {
    /// Smallest selectable size.
    pub const MIN: u8 = 12;
    /// Largest selectable size.
    pub const MAX: u8 = 22;

    /// Build a font size, clamping into `[MIN, MAX]`.
    #[must_use]
    pub fn new(px: u8) -> Self {
        Self(px.clamp(Self::MIN, Self::MAX))
    }

    /// The size in pixels.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(16)
    }
}

impl<'de> Deserialize<'de> for FontSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let px = u8::deserialize(deserializer)?;
        Ok(Self::new(px))
    }
}

/// Display preferences seeded into the page's initial store.
///
/// Field names are camelCase because they land in the page's script verbatim.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub sidebar_open: bool,
    pub links_open: bool,
    pub font_size: FontSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_clamps_low() {
        assert_eq!(FontSize::new(0).get(), 12);
        assert_eq!(FontSize::new(11).get(), 12);
        assert_eq!(FontSize::new(12).get(), 12);
    }

    #[test]
    fn font_size_clamps_high() {
        assert_eq!(FontSize::new(22).get(), 22);
        assert_eq!(FontSize::new(23).get(), 22);
        assert_eq!(FontSize::new(255).get(), 22);
    }

    #[test]
    fn font_size_clamps_on_deserialize() {
        let size: FontSize = serde_json::from_str("99").unwrap();
        assert_eq!(size.get(), 22);
    }

    #[test]
    fn theme_round_trip() {
        // `as_str` must match the serde form; both end up in browser storage.
        for theme in [Theme::Light, Theme::Dark] {
            let json = serde_json::to_value(theme).unwrap();
            assert_eq!(json, serde_json::json!(theme.as_str()));
            assert_eq!(serde_json::from_value::<Theme>(json).unwrap(), theme);
        }
        assert!(serde_json::from_str::<Theme>(r#""blue""#).is_err());
    }

    #[test]
    fn preference_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, Theme::Light);
        assert!(!prefs.sidebar_open);
        assert!(!prefs.links_open);
        assert_eq!(prefs.font_size.get(), 16);
    }

    #[test]
    fn preferences_serialize_camel_case() {
        let json = serde_json::to_value(Preferences::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "theme": "light",
                "sidebarOpen": false,
                "linksOpen": false,
                "fontSize": 16
            })
        );
    }

    #[test]
    fn message_senders() {
        let msg = Message {
            text: "hello".to_string(),
            sender: Sender::Bot,
        };
        let json = serde_json::to_value(msg).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "hello", "sender": "bot" }));
    }
}
