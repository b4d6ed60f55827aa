//! The song catalog: the authoritative, ordered collection of songs.
//!
//! Insertion order is preserved by every operation. Mutations either fully
//! apply or leave the catalog untouched.

use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::{Active, Song, SongDraft, SongId};
use crate::validation::{contains_ignore_case, validate_song_fields};

/// Which songs a query keeps, by their active flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveFilter {
    #[default]
    All,
    Only(Active),
}

impl ActiveFilter {
    #[must_use]
    pub fn matches(self, active: Active) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == active,
        }
    }
}

impl FromStr for ActiveFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "Y" => Ok(Self::Only(Active::Yes)),
            "N" => Ok(Self::Only(Active::No)),
            other => Err(Error::InvalidData(format!(
                "unknown active filter '{other}' (expected all, Y or N)"
            ))),
        }
    }
}

/// Query parameters for [`SongCatalog::query`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter {
    pub active: ActiveFilter,

    /// Matched case-insensitively against name and artist. Empty matches all.
    pub search: String,
}

impl SongFilter {
    #[must_use]
    pub fn new(active: ActiveFilter, search: impl Into<String>) -> Self {
        Self {
            active,
            search: search.into(),
        }
    }

    #[must_use]
    pub fn matches(&self, song: &Song) -> bool {
        self.active.matches(song.active)
            && (contains_ignore_case(&song.name, &self.search)
                || contains_ignore_case(&song.artist, &self.search))
    }
}

/// In-memory song catalog.
#[derive(Debug, Clone, Default)]
pub struct SongCatalog {
    songs: Vec<Song>,

    /// Ids of every record in `songs`.
    ids: HashSet<SongId>,
}

impl SongCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `draft`, give it a fresh id and append it.
    pub fn add(&mut self, draft: SongDraft) -> Result<SongId> {
        validate_song_fields(&draft.name, &draft.artist)?;
        let id = self.fresh_id();
        self.ids.insert(id);
        self.songs.push(Song::from_draft(id, draft));
        log::debug!("Added song {}", id);
        Ok(id)
    }

    /// Append records that already carry ids.
    ///
    /// All records are checked before any is stored: each must pass
    /// validation and carry an id unused by the catalog and by the rest of
    /// the batch.
    pub fn add_all(&mut self, songs: Vec<Song>) -> Result<usize> {
        let mut seen = HashSet::with_capacity(songs.len());
        for song in &songs {
            validate_song_fields(&song.name, &song.artist)?;
            if self.contains(song.id()) || !seen.insert(song.id()) {
                return Err(Error::DuplicateId {
                    id: song.id().to_string(),
                });
            }
        }

        let count = songs.len();
        self.ids.extend(seen);
        self.songs.extend(songs);
        log::debug!("Appended {} songs, catalog size now {}", count, self.songs.len());
        Ok(count)
    }

    /// Replace the record with the same id as `song`.
    ///
    /// Returns `Ok(false)` without changing anything when no such record
    /// exists.
    pub fn update(&mut self, song: Song) -> Result<bool> {
        validate_song_fields(&song.name, &song.artist)?;
        match self.songs.iter_mut().find(|s| s.id() == song.id()) {
            Some(slot) => {
                *slot = song;
                Ok(true)
            }
            None => {
                log::debug!("Update for unknown song {} ignored", song.id());
                Ok(false)
            }
        }
    }

    /// Remove the record with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: SongId) -> bool {
        if !self.ids.remove(&id) {
            return false;
        }
        self.songs.retain(|s| s.id() != id);
        true
    }

    /// Songs matching `filter`, in insertion order.
    #[must_use]
    pub fn query(&self, filter: &SongFilter) -> Vec<&Song> {
        self.songs.iter().filter(|s| filter.matches(s)).collect()
    }

    /// Songs eligible for setlist generation, in insertion order.
    #[must_use]
    pub fn active_songs(&self) -> Vec<&Song> {
        self.songs.iter().filter(|s| s.is_active()).collect()
    }

    #[must_use]
    pub fn get(&self, id: SongId) -> Option<&Song> {
        self.songs.iter().find(|s| s.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: SongId) -> bool {
        self.ids.contains(&id)
    }

    /// An id not used by any record in the catalog.
    #[must_use]
    pub fn fresh_id(&self) -> SongId {
        loop {
            let id = SongId::new();
            if !self.contains(id) {
                return id;
            }
        }
    }

    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Song> {
        self.songs.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl<'a> IntoIterator for &'a SongCatalog {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> SongCatalog {
        let mut catalog = SongCatalog::new();
        catalog
            .add(SongDraft::new("6th Avenue Heartache", "Wallflowers").with_singer("Mark"))
            .unwrap();
        catalog
            .add(SongDraft::new("One Headlight", "Wallflowers").with_active(Active::No))
            .unwrap();
        catalog
            .add(SongDraft::new("Wagon Wheel", "Old Crow Medicine Show"))
            .unwrap();
        catalog
    }

    fn names(songs: &[&Song]) -> Vec<String> {
        songs.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn test_add_assigns_distinct_ids_in_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 3);

        let ids: HashSet<SongId> = catalog.iter().map(Song::id).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(catalog.songs()[0].name, "6th Avenue Heartache");
        assert_eq!(catalog.songs()[2].name, "Wagon Wheel");
    }

    #[test]
    fn test_add_rejects_blank_name_or_artist() {
        let mut catalog = SongCatalog::new();

        let err = catalog.add(SongDraft::new("   ", "Bar")).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "name" }));

        let err = catalog.add(SongDraft::new("Foo", "")).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "artist" }));

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_update_replaces_matching_record() {
        let mut catalog = sample_catalog();
        let mut song = catalog.songs()[1].clone();
        song.active = Active::Yes;
        song.tre_key = "G".to_string();

        assert!(catalog.update(song.clone()).unwrap());
        assert_eq!(catalog.get(song.id()), Some(&song));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.songs()[1].id(), song.id());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut catalog = sample_catalog();
        let stranger = Song::from_draft(SongId::new(), SongDraft::new("Foo", "Bar"));

        assert!(!catalog.update(stranger).unwrap());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_update_rejects_blank_fields_without_change() {
        let mut catalog = sample_catalog();
        let original = catalog.songs()[0].clone();
        let mut edited = original.clone();
        edited.artist = " ".to_string();

        assert!(catalog.update(edited).is_err());
        assert_eq!(catalog.songs()[0], original);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut catalog = sample_catalog();
        let id = catalog.songs()[0].id();

        assert!(catalog.remove(id));
        assert!(!catalog.remove(id));
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.contains(id));
    }

    #[test]
    fn test_query_all_empty_returns_everything_in_order() {
        let catalog = sample_catalog();
        let result = catalog.query(&SongFilter::default());
        let expected: Vec<&Song> = catalog.iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_query_by_active_state() {
        let catalog = sample_catalog();

        let active = catalog.query(&SongFilter::new(ActiveFilter::Only(Active::Yes), ""));
        assert_eq!(names(&active), vec!["6th Avenue Heartache", "Wagon Wheel"]);

        let inactive = catalog.query(&SongFilter::new(ActiveFilter::Only(Active::No), ""));
        assert_eq!(names(&inactive), vec!["One Headlight"]);
    }

    #[test]
    fn test_query_search_matches_name_or_artist_case_insensitively() {
        let catalog = sample_catalog();

        let by_artist = catalog.query(&SongFilter::new(ActiveFilter::All, "WALLFLOWERS"));
        assert_eq!(names(&by_artist), vec!["6th Avenue Heartache", "One Headlight"]);

        let by_name = catalog.query(&SongFilter::new(ActiveFilter::All, "wheel"));
        assert_eq!(names(&by_name), vec!["Wagon Wheel"]);

        let combined = catalog.query(&SongFilter::new(ActiveFilter::Only(Active::Yes), "headlight"));
        assert!(combined.is_empty());
    }

    #[test]
    fn test_active_songs() {
        let catalog = sample_catalog();
        assert_eq!(
            names(&catalog.active_songs()),
            vec!["6th Avenue Heartache", "Wagon Wheel"]
        );
    }

    #[test]
    fn test_add_all_is_all_or_nothing() {
        let mut catalog = sample_catalog();
        let existing = catalog.songs()[0].id();

        let batch = vec![
            Song::from_draft(catalog.fresh_id(), SongDraft::new("New", "Band")),
            Song::from_draft(existing, SongDraft::new("Clash", "Band")),
        ];
        let err = catalog.add_all(batch).unwrap_err();
        assert!(matches!(err, Error::DuplicateId { .. }));
        assert_eq!(catalog.len(), 3);

        let batch = vec![
            Song::from_draft(catalog.fresh_id(), SongDraft::new("New", "Band")),
            Song::from_draft(catalog.fresh_id(), SongDraft::new("", "Band")),
        ];
        assert!(catalog.add_all(batch).is_err());
        assert_eq!(catalog.len(), 3);

        let batch = vec![Song::from_draft(catalog.fresh_id(), SongDraft::new("New", "Band"))];
        assert_eq!(catalog.add_all(batch).unwrap(), 1);
        assert_eq!(catalog.songs()[3].name, "New");
    }

    #[test]
    fn test_add_all_rejects_duplicates_within_batch() {
        let mut catalog = SongCatalog::new();
        let id = catalog.fresh_id();
        let batch = vec![
            Song::from_draft(id, SongDraft::new("A", "X")),
            Song::from_draft(id, SongDraft::new("B", "Y")),
        ];
        assert!(catalog.add_all(batch).is_err());
        assert!(catalog.is_empty());
        assert!(!catalog.contains(id));
    }

    #[test]
    fn test_contains_tracks_every_mutation() {
        let mut catalog = SongCatalog::new();
        let added = catalog.add(SongDraft::new("A", "X")).unwrap();

        let batch: Vec<Song> = (0..500)
            .map(|i| Song::from_draft(SongId::new(), SongDraft::new(format!("Song {i}"), "Band")))
            .collect();
        let batch_ids: Vec<SongId> = batch.iter().map(Song::id).collect();
        assert_eq!(catalog.add_all(batch).unwrap(), 500);

        assert!(catalog.contains(added));
        assert!(batch_ids.iter().all(|id| catalog.contains(*id)));
        assert!(!catalog.contains(catalog.fresh_id()));

        let mut edited = catalog.get(added).unwrap().clone();
        edited.name = "A2".to_string();
        assert!(catalog.update(edited).unwrap());
        assert!(catalog.contains(added));

        assert!(catalog.remove(batch_ids[0]));
        assert!(!catalog.contains(batch_ids[0]));
        assert!(catalog.get(batch_ids[0]).is_none());
        assert_eq!(catalog.len(), 500);
        assert_eq!(catalog.iter().filter(|s| catalog.contains(s.id())).count(), 500);
    }

    #[test]
    fn test_active_filter_from_str() {
        assert_eq!("all".parse::<ActiveFilter>().unwrap(), ActiveFilter::All);
        assert_eq!("y".parse::<ActiveFilter>().unwrap(), ActiveFilter::Only(Active::Yes));
        assert_eq!("N".parse::<ActiveFilter>().unwrap(), ActiveFilter::Only(Active::No));
        assert!("maybe".parse::<ActiveFilter>().is_err());
    }
}
