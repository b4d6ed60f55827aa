//! In-memory working session.
//!
//! A session owns everything one user works with between start-up and exit:
//! the roster and who is signed in, the song catalog, the setlists generated
//! so far, and the generator settings. Nothing is persisted.

use rand::Rng;
use thiserror::Error;

use eclectic_core::{
    BandMember, GeneratorSettings, Roster, Setlist, SetlistId, Song, SongCatalog, SongDraft,
    SongFilter, SongId,
};
use eclectic_import::{BulkImportParser, ImportError};
use eclectic_setlist::{GenerateError, SetlistGenerator};

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No band member matches '{0}'")]
    UnknownMember(String),

    #[error("Select a band member first")]
    NoMemberSelected,

    #[error(transparent)]
    Catalog(#[from] eclectic_core::Error),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Import(#[from] ImportError),
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// What the song editor hands back on save.
#[derive(Debug, Clone)]
pub enum SongEdit {
    /// A song that is not in the catalog yet.
    New(SongDraft),
    /// An edited copy of a catalog song, matched by id.
    Existing(Song),
}

#[derive(Debug)]
pub struct Session {
    roster: Roster,
    current_user: Option<BandMember>,
    catalog: SongCatalog,
    setlists: Vec<Setlist>,
    settings: GeneratorSettings,
    parser: BulkImportParser,
}

impl Session {
    #[must_use]
    pub fn new(roster: Roster, settings: GeneratorSettings, parser: BulkImportParser) -> Self {
        Self {
            roster,
            current_user: None,
            catalog: SongCatalog::new(),
            setlists: Vec::new(),
            settings,
            parser,
        }
    }

    /// Sign in as the roster member matching `email_or_name`.
    pub fn select_member(&mut self, email_or_name: &str) -> SessionResult<&BandMember> {
        let member = self
            .roster
            .find(email_or_name)
            .cloned()
            .ok_or_else(|| SessionError::UnknownMember(email_or_name.to_string()))?;

        log::info!("Signed in as {}", member.name);
        Ok(&*self.current_user.insert(member))
    }

    pub fn sign_out(&mut self) {
        if let Some(member) = self.current_user.take() {
            log::info!("{} signed out", member.name);
        }
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&BandMember> {
        self.current_user.as_ref()
    }

    /// Add a new song or replace an existing one.
    ///
    /// Returns the id of the saved song. Saving an edit whose id is no
    /// longer in the catalog changes nothing.
    pub fn save_song(&mut self, edit: SongEdit) -> SessionResult<SongId> {
        match edit {
            SongEdit::New(draft) => Ok(self.catalog.add(draft)?),
            SongEdit::Existing(song) => {
                let id = song.id();
                if !self.catalog.update(song)? {
                    log::debug!("Song {} not in catalog; edit dropped", id);
                }
                Ok(id)
            }
        }
    }

    /// Remove a song. Returns whether it was present.
    pub fn delete_song(&mut self, id: SongId) -> bool {
        self.catalog.remove(id)
    }

    #[must_use]
    pub fn filtered_songs(&self, filter: &SongFilter) -> Vec<&Song> {
        self.catalog.query(filter)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.catalog.active_songs().len()
    }

    /// Change the generator shape. Values below 1 are raised to 1.
    pub fn set_generator_settings(&mut self, num_sets: usize, songs_per_set: usize) {
        self.settings = GeneratorSettings::new(num_sets, songs_per_set);
    }

    /// Generate a setlist attributed to the signed-in member and keep it.
    ///
    /// On failure neither the catalog nor the existing setlists change.
    pub fn generate_setlist<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SessionResult<&Setlist> {
        let member = self
            .current_user
            .as_ref()
            .ok_or(SessionError::NoMemberSelected)?;

        let setlist =
            SetlistGenerator::new(self.settings).generate_with_rng(&self.catalog, member, rng)?;

        self.setlists.push(setlist);
        self.setlists
            .last()
            .ok_or(SessionError::Generate(GenerateError::NoActiveSongs))
    }

    /// Remove a generated setlist. Returns whether it was present.
    pub fn delete_setlist(&mut self, id: SetlistId) -> bool {
        let before = self.setlists.len();
        self.setlists.retain(|setlist| setlist.id() != id);
        before != self.setlists.len()
    }

    /// Import a pasted sheet into the catalog. Returns the number of songs
    /// added.
    pub fn bulk_import(&mut self, text: &str) -> SessionResult<usize> {
        Ok(self.parser.import_into(text, &mut self.catalog)?)
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn catalog(&self) -> &SongCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn setlists(&self) -> &[Setlist] {
        &self.setlists
    }

    #[must_use]
    pub const fn settings(&self) -> GeneratorSettings {
        self.settings
    }

    #[must_use]
    pub fn parser(&self) -> &BulkImportParser {
        &self.parser
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            Roster::default_band(),
            GeneratorSettings::default(),
            BulkImportParser::default(),
        )
    }
}
