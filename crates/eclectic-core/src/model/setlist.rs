use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{SetlistId, SongId};
use crate::model::song::Song;

/// A copy of the identifying fields of a song, taken when a setlist is
/// generated. Later catalog edits do not reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRef {
    pub id: SongId,
    pub name: String,
    pub artist: String,
    pub singer: String,
}

impl SongRef {
    #[must_use]
    pub fn snapshot(song: &Song) -> Self {
        Self {
            id: song.id(),
            name: song.name.clone(),
            artist: song.artist.clone(),
            singer: song.singer.clone(),
        }
    }
}

/// One set of a setlist, in performance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Set(Vec<SongRef>);

impl Set {
    #[must_use]
    pub const fn new(songs: Vec<SongRef>) -> Self {
        Self(songs)
    }

    #[must_use]
    pub fn songs(&self) -> &[SongRef] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SongRef> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Set {
    type Item = &'a SongRef;
    type IntoIter = std::slice::Iter<'a, SongRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A generated performance program.
///
/// Setlists are immutable once built: every field is read through an
/// accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setlist {
    id: SetlistId,
    name: String,
    date: NaiveDate,
    created_by: String,
    created_at: DateTime<Utc>,
    sets: Vec<Set>,
}

impl Setlist {
    /// Build a setlist with a fresh id. The name and date are derived from
    /// `created_at`.
    #[must_use]
    pub fn new(created_by: impl Into<String>, created_at: DateTime<Utc>, sets: Vec<Set>) -> Self {
        Self {
            id: SetlistId::new(),
            name: format!("Gig {}", created_at.format("%-m/%-d/%Y")),
            date: created_at.date_naive(),
            created_by: created_by.into(),
            created_at,
            sets,
        }
    }

    #[must_use]
    pub const fn id(&self) -> SetlistId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn sets(&self) -> &[Set] {
        &self.sets
    }

    /// Total number of song slots across all sets.
    #[must_use]
    pub fn song_count(&self) -> usize {
        self.sets.iter().map(Set::len).sum()
    }

    /// Every song id in performance order, set by set.
    pub fn song_ids(&self) -> impl Iterator<Item = SongId> + '_ {
        self.sets.iter().flat_map(|set| set.iter().map(|song| song.id))
    }
}
