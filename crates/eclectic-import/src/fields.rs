//! Header handling for song sheets.
//!
//! A sheet's first line names its columns. [`HeaderMap`] records where each
//! name sits, and [`RawRow`] pulls the recognized cells out of a data line
//! through that map, one entry of [`ImportField::ALL`] at a time.

use std::collections::HashMap;

use eclectic_core::SongDraft;

use crate::coerce::{coerce_active, coerce_confidence, coerce_tempo, coerce_vox_difficulty};

// ---------------------------------------------------------------------------
// Recognized columns
// ---------------------------------------------------------------------------

/// A column the importer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportField {
    SongName,
    Artist,
    SongActive,
    Singer,
    SongKey,
    SongBpm,
    VoxDifficulty,
    TreConfidence,
    MarkGuitar,
    SongLinkArtist,
}

impl ImportField {
    pub const COUNT: usize = 10;

    /// Every recognized field, in extraction order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::SongName,
        Self::Artist,
        Self::SongActive,
        Self::Singer,
        Self::SongKey,
        Self::SongBpm,
        Self::VoxDifficulty,
        Self::TreConfidence,
        Self::MarkGuitar,
        Self::SongLinkArtist,
    ];

    /// The exact header text for this field.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::SongName => "SongName",
            Self::Artist => "Artist",
            Self::SongActive => "SongActive",
            Self::Singer => "Singer",
            Self::SongKey => "SongKey",
            Self::SongBpm => "SongBPM",
            Self::VoxDifficulty => "VoxDifficulty",
            Self::TreConfidence => "TREConfidence",
            Self::MarkGuitar => "MarkGuitar",
            Self::SongLinkArtist => "SongLink_Artist",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Header map
// ---------------------------------------------------------------------------

/// Column positions keyed by trimmed header name.
///
/// Unknown headers are kept but never looked up. When a name repeats, the
/// right-most column wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    columns: HashMap<String, usize>,
}

impl HeaderMap {
    #[must_use]
    pub fn parse(header_line: &str) -> Self {
        let columns = header_line
            .split('\t')
            .enumerate()
            .map(|(i, name)| (name.trim().to_string(), i))
            .collect();
        Self { columns }
    }

    /// Position of `field`'s column, if the sheet has one.
    #[must_use]
    pub fn column(&self, field: ImportField) -> Option<usize> {
        self.columns.get(field.header()).copied()
    }

    /// Recognized fields present in the sheet.
    #[must_use]
    pub fn recognized(&self) -> Vec<ImportField> {
        ImportField::ALL
            .into_iter()
            .filter(|f| self.column(*f).is_some())
            .collect()
    }

    /// Number of distinct header names, recognized or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// The trimmed text of every recognized cell in one data line.
///
/// Cells whose column is absent, either from the header or from a short
/// line, read as the empty string. No coercion has happened yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    cells: [String; ImportField::COUNT],
}

impl RawRow {
    #[must_use]
    pub fn extract(line: &str, headers: &HeaderMap) -> Self {
        let columns: Vec<&str> = line.split('\t').collect();
        let cells = ImportField::ALL.map(|field| {
            headers
                .column(field)
                .and_then(|i| columns.get(i))
                .map(|cell| cell.trim().to_string())
                .unwrap_or_default()
        });
        Self { cells }
    }

    #[must_use]
    pub fn get(&self, field: ImportField) -> &str {
        &self.cells[field.index()]
    }

    /// Replace the active cell with the flag it imports as (`Y` or `N`).
    /// Every other cell keeps its trimmed text.
    #[must_use]
    pub fn with_active_flag(mut self) -> Self {
        let flag = coerce_active(self.get(ImportField::SongActive));
        self.cells[ImportField::SongActive.index()] = flag.as_str().to_string();
        self
    }

    /// Both a name and an artist are present.
    #[must_use]
    pub fn is_acceptable(&self) -> bool {
        eclectic_core::validation::validate_song_fields(
            self.get(ImportField::SongName),
            self.get(ImportField::Artist),
        )
        .is_ok()
    }

    /// Apply the per-field coercion policies.
    ///
    /// The sheet carries one key and one tempo column, so the original and
    /// band values are both taken from it.
    #[must_use]
    pub fn to_draft(&self) -> SongDraft {
        let key = self.get(ImportField::SongKey);
        let tempo = coerce_tempo(self.get(ImportField::SongBpm));

        SongDraft::new(self.get(ImportField::SongName), self.get(ImportField::Artist))
            .with_active(coerce_active(self.get(ImportField::SongActive)))
            .with_singer(self.get(ImportField::Singer))
            .with_keys(key, key)
            .with_tempos(tempo, tempo)
            .with_vox_difficulty(coerce_vox_difficulty(self.get(ImportField::VoxDifficulty)))
            .with_confidence(coerce_confidence(self.get(ImportField::TreConfidence)))
            .with_lead_guitar(self.get(ImportField::MarkGuitar))
            .with_youtube_link(self.get(ImportField::SongLinkArtist))
    }
}
