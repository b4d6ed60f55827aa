use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::SongId;

/// Whether a song is eligible for setlist generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Active {
    #[default]
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
}

impl Active {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Y",
            Self::No => "N",
        }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for Active {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The editable fields of a song, without an id.
///
/// This is what the catalog accepts on `add`; the catalog attaches the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongDraft {
    pub name: String,
    pub artist: String,

    /// Key of the original recording (e.g., "F").
    pub original_key: String,

    /// Key the band plays it in.
    pub tre_key: String,

    pub original_tempo: i32,
    pub tre_tempo: i32,
    pub active: Active,

    /// Lead vocalist, usually a roster member's name.
    pub singer: String,

    pub lead_guitar: String,

    /// Vocal difficulty, 1 (easy) to 3 (hard).
    pub vox_difficulty: i32,

    /// Performance readiness, 1.0 to 5.0 in quarter steps.
    pub confidence: f64,

    pub youtube_link: String,
}

impl Default for SongDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            artist: String::new(),
            original_key: String::new(),
            tre_key: String::new(),
            original_tempo: 0,
            tre_tempo: 0,
            active: Active::Yes,
            singer: String::new(),
            lead_guitar: String::new(),
            vox_difficulty: 1,
            confidence: 0.0,
            youtube_link: String::new(),
        }
    }
}

impl SongDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_active(mut self, active: Active) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub fn with_singer(mut self, singer: impl Into<String>) -> Self {
        self.singer = singer.into();
        self
    }

    /// Set both the original and the band's key.
    #[must_use]
    pub fn with_keys(mut self, original: impl Into<String>, tre: impl Into<String>) -> Self {
        self.original_key = original.into();
        self.tre_key = tre.into();
        self
    }

    /// Set both the original and the band's tempo.
    #[must_use]
    pub const fn with_tempos(mut self, original: i32, tre: i32) -> Self {
        self.original_tempo = original;
        self.tre_tempo = tre;
        self
    }

    #[must_use]
    pub fn with_lead_guitar(mut self, lead_guitar: impl Into<String>) -> Self {
        self.lead_guitar = lead_guitar.into();
        self
    }

    #[must_use]
    pub const fn with_vox_difficulty(mut self, difficulty: i32) -> Self {
        self.vox_difficulty = difficulty;
        self
    }

    #[must_use]
    pub const fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    #[must_use]
    pub fn with_youtube_link(mut self, link: impl Into<String>) -> Self {
        self.youtube_link = link.into();
        self
    }
}

/// A catalog entry. The id is fixed once the catalog assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    id: SongId,
    pub name: String,
    pub artist: String,
    pub original_key: String,
    pub tre_key: String,
    pub original_tempo: i32,
    pub tre_tempo: i32,
    pub active: Active,
    pub singer: String,
    pub lead_guitar: String,
    pub vox_difficulty: i32,
    pub confidence: f64,
    pub youtube_link: String,
}

impl Song {
    #[must_use]
    pub fn from_draft(id: SongId, draft: SongDraft) -> Self {
        Self {
            id,
            name: draft.name,
            artist: draft.artist,
            original_key: draft.original_key,
            tre_key: draft.tre_key,
            original_tempo: draft.original_tempo,
            tre_tempo: draft.tre_tempo,
            active: draft.active,
            singer: draft.singer,
            lead_guitar: draft.lead_guitar,
            vox_difficulty: draft.vox_difficulty,
            confidence: draft.confidence,
            youtube_link: draft.youtube_link,
        }
    }

    #[must_use]
    pub const fn id(&self) -> SongId {
        self.id
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_active()
    }

    /// Whether the vocal difficulty is within 1..=3.
    #[must_use]
    pub fn has_valid_vox_difficulty(&self) -> bool {
        (1..=3).contains(&self.vox_difficulty)
    }

    /// Whether confidence is within 1.0..=5.0 and lands on a quarter step.
    #[must_use]
    pub fn has_valid_confidence(&self) -> bool {
        (1.0..=5.0).contains(&self.confidence) && (self.confidence * 4.0).fract().abs() < f64::EPSILON
    }
}
