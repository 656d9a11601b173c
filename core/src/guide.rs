//! Settled configuration for the section character guide.
//!
//! The guide reads two optional JSON documents: a message map keyed by
//! section id and an offset config. Both are resolved exactly once into a
//! [`GuideSettings`]; if either document is missing or malformed the whole
//! guide runs on the built-in defaults.

use std::collections::HashMap;

use serde::Deserialize;

use crate::section::{SectionId, SECTION_IDS};

pub const MESSAGES_PATH: &str = "character-messages.json";
pub const CONFIG_PATH: &str = "character-config.json";

/// Widths at or below this are laid out with the mobile offsets.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const DEFAULT_OFFSET: Offset = Offset {
    desktop_top: 80.0,
    mobile_top: 60.0,
};

pub const BUBBLE_SHOW_DELAY_MS: u32 = 1000;
pub const BUBBLE_AUTO_HIDE_MS: u32 = 4000;
pub const RESIZE_DEBOUNCE_MS: u32 = 120;
pub const VISIBILITY_THRESHOLD: f64 = 0.2;
pub const VISIBILITY_ROOT_MARGIN: &str = "-50px 0px -50px 0px";

pub fn default_message(id: SectionId) -> &'static str {
    match id {
        SectionId::Home => "Hi! Welcome to my portfolio! 👋",
        SectionId::About => "Let me tell you about myself! 🧑‍💻",
        SectionId::Skills => "Check out my awesome skills! 💪",
        SectionId::Projects => "Here are my cool projects! 🚀",
        SectionId::Contact => "Let's get in touch! 📧",
    }
}

pub fn is_mobile_width(viewport_width: f64) -> bool {
    viewport_width <= MOBILE_BREAKPOINT_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offset {
    #[serde(default = "default_desktop_top")]
    pub desktop_top: f64,
    #[serde(default = "default_mobile_top")]
    pub mobile_top: f64,
}

fn default_desktop_top() -> f64 {
    DEFAULT_OFFSET.desktop_top
}

fn default_mobile_top() -> f64 {
    DEFAULT_OFFSET.mobile_top
}

impl Offset {
    pub fn for_width(&self, viewport_width: f64) -> f64 {
        if is_mobile_width(viewport_width) {
            self.mobile_top
        } else {
            self.desktop_top
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOffset {
    #[serde(default)]
    pub desktop_top: Option<f64>,
    #[serde(default)]
    pub mobile_top: Option<f64>,
}

/// Wire shape of `character-config.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideConfig {
    #[serde(default)]
    pub default_offset: Option<Offset>,
    #[serde(default)]
    pub sections: HashMap<String, SectionOffset>,
}

/// Wire shape of `character-messages.json`.
pub type MessageMap = HashMap<String, String>;

pub fn parse_config(raw: &str) -> Result<GuideConfig, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn parse_messages(raw: &str) -> Result<MessageMap, serde_json::Error> {
    serde_json::from_str(raw)
}

#[derive(Debug, Clone, PartialEq)]
struct SectionSettings {
    message: String,
    offset: Offset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSource {
    Loaded,
    Defaults,
}

/// Immutable guide configuration, read after settling.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideSettings {
    source: SettingsSource,
    sections: [SectionSettings; 5],
}

impl GuideSettings {
    pub fn defaults() -> Self {
        Self {
            source: SettingsSource::Defaults,
            sections: SECTION_IDS.map(|id| SectionSettings {
                message: default_message(id).to_string(),
                offset: DEFAULT_OFFSET,
            }),
        }
    }

    /// A section absent from `messages` keeps its built-in line; a section
    /// absent from `config.sections` uses the config's default offset pair.
    pub fn from_loaded(messages: &MessageMap, config: &GuideConfig) -> Self {
        let fallback = config.default_offset.unwrap_or(DEFAULT_OFFSET);
        let sections = SECTION_IDS.map(|id| {
            let message = messages
                .get(id.as_str())
                .cloned()
                .unwrap_or_else(|| default_message(id).to_string());
            let offset = match config.sections.get(id.as_str()) {
                Some(section) => Offset {
                    desktop_top: section.desktop_top.unwrap_or(fallback.desktop_top),
                    mobile_top: section.mobile_top.unwrap_or(fallback.mobile_top),
                },
                None => fallback,
            };
            SectionSettings { message, offset }
        });
        Self {
            source: SettingsSource::Loaded,
            sections,
        }
    }

    /// Both documents must have loaded; any failure falls back entirely.
    pub fn settle<E>(
        messages: Result<MessageMap, E>,
        config: Result<GuideConfig, E>,
    ) -> Self {
        match (messages, config) {
            (Ok(messages), Ok(config)) => Self::from_loaded(&messages, &config),
            _ => Self::defaults(),
        }
    }

    pub fn source(&self) -> SettingsSource {
        self.source
    }

    pub fn message(&self, id: SectionId) -> &str {
        &self.section(id).message
    }

    pub fn offset(&self, id: SectionId) -> Offset {
        self.section(id).offset
    }

    pub fn top_px(&self, id: SectionId, viewport_width: f64) -> f64 {
        self.offset(id).for_width(viewport_width)
    }

    fn section(&self, id: SectionId) -> &SectionSettings {
        &self.sections[id.index()]
    }
}

impl Default for GuideSettings {
    fn default() -> Self {
        Self::defaults()
    }
}
