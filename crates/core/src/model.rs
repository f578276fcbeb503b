//! Pitch and idea records as read from the datastore.
//!
//! Upstream tooling owns the lifecycle of both tables; everything here is read-only. Textual
//! columns are nullable in storage, so pitch fields are modelled as `Option<String>` and the
//! emptiness rules are applied when a value is consumed, not when it is loaded.

use crate::constants::{
    DEFAULT_IDEA_DESCRIPTION, DEFAULT_IDEA_NAME, DEFAULT_INDUSTRY, DEFAULT_LANGUAGE_TAG,
    URDU_LANGUAGE_TAG,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Returns the value if it is present and not the empty string.
///
/// Whitespace-only values count as present.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Document language. Only two text sets exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Urdu,
}

impl Language {
    /// Maps a locale tag onto a document language. Only an exact `"ur"` selects Urdu.
    pub fn from_tag(tag: &str) -> Self {
        if tag == URDU_LANGUAGE_TAG {
            Language::Urdu
        } else {
            Language::English
        }
    }

    /// Value of the root `lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Urdu => "ur",
        }
    }

    /// Value of the root `dir` attribute.
    pub fn direction(self) -> &'static str {
        match self {
            Language::English => "ltr",
            Language::Urdu => "rtl",
        }
    }
}

/// Writing tone requested for an idea.
///
/// Unknown tones from the datastore are preserved verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    #[default]
    Formal,
    Casual,
    Playful,
    Other(String),
}

impl Tone {
    pub fn as_str(&self) -> &str {
        match self {
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Playful => "playful",
            Tone::Other(value) => value,
        }
    }
}

impl From<String> for Tone {
    fn from(value: String) -> Self {
        match value.as_str() {
            "formal" => Tone::Formal,
            "casual" => Tone::Casual,
            "playful" => Tone::Playful,
            _ => Tone::Other(value),
        }
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

/// Business concept a pitch was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    #[serde(default)]
    pub idea_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub language: String,
}

impl Idea {
    pub fn language(&self) -> Language {
        Language::from_tag(&self.language)
    }
}

impl Default for Idea {
    /// The idea the renderer falls back to when none is supplied.
    fn default() -> Self {
        Self {
            idea_name: DEFAULT_IDEA_NAME.into(),
            description: DEFAULT_IDEA_DESCRIPTION.into(),
            industry: DEFAULT_INDUSTRY.into(),
            tone: Tone::Formal,
            language: DEFAULT_LANGUAGE_TAG.into(),
        }
    }
}

/// A generated startup pitch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pitch {
    pub id: String,
    pub idea_id: Option<String>,
    pub startup_name: Option<String>,
    pub tagline: Option<String>,
    pub pitch: Option<String>,
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub target_audience: Option<String>,
    pub landing_copy: Option<String>,
    pub color_palette: Option<String>,
    pub logo_concept: Option<String>,
    pub language: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Pitch {
    /// The subset of fields the document renderer consumes.
    pub fn content(&self) -> PitchContent {
        PitchContent {
            startup_name: self.startup_name.clone(),
            tagline: self.tagline.clone(),
            pitch: self.pitch.clone(),
            problem: self.problem.clone(),
            solution: self.solution.clone(),
            target_audience: self.target_audience.clone(),
            landing_copy: self.landing_copy.clone(),
            color_palette: self.color_palette.clone(),
            logo_concept: self.logo_concept.clone(),
        }
    }
}

/// Partial pitch fields handed to the renderer. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchContent {
    pub startup_name: Option<String>,
    pub tagline: Option<String>,
    pub pitch: Option<String>,
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub target_audience: Option<String>,
    pub landing_copy: Option<String>,
    /// Carried through; has no effect on the rendered document.
    pub color_palette: Option<String>,
    /// Carried through; has no effect on the rendered document.
    pub logo_concept: Option<String>,
}

/// A pitch row together with its left-joined idea row.
///
/// The JSON shape matches what the hosted datastore returns for an embedded select: the pitch
/// columns at the top level and the related idea under `ideas`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchRecord {
    #[serde(flatten)]
    pub pitch: Pitch,
    #[serde(rename = "ideas", default)]
    pub idea: Option<Idea>,
}

impl PitchRecord {
    /// The idea used at render time.
    ///
    /// The joined idea is used verbatim. Without one, an idea is synthesised from the pitch's own
    /// name, text and language tag.
    pub fn effective_idea(&self) -> Idea {
        if let Some(idea) = &self.idea {
            return idea.clone();
        }

        Idea {
            idea_name: non_empty(&self.pitch.startup_name)
                .unwrap_or(DEFAULT_IDEA_NAME)
                .to_owned(),
            description: non_empty(&self.pitch.pitch)
                .unwrap_or(DEFAULT_IDEA_DESCRIPTION)
                .to_owned(),
            industry: DEFAULT_INDUSTRY.into(),
            tone: Tone::Formal,
            language: non_empty(&self.pitch.language)
                .unwrap_or(DEFAULT_LANGUAGE_TAG)
                .to_owned(),
        }
    }
}
