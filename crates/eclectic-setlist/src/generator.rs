//! Random setlist generation.
//!
//! The active songs are shuffled once and the permutation is cut into
//! consecutive sets. A song therefore appears at most once per setlist, and
//! sets are never padded or refilled once the pool runs out.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use eclectic_core::{BandMember, GeneratorSettings, Set, Setlist, SongCatalog, SongRef};

use crate::error::{GenerateError, GenerateResult};

/// Builds setlists from a catalog with fixed settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetlistGenerator {
    settings: GeneratorSettings,
}

impl SetlistGenerator {
    #[must_use]
    pub const fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub const fn settings(&self) -> GeneratorSettings {
        self.settings
    }

    /// Generate a setlist using an entropy-seeded random source.
    pub fn generate(
        &self,
        catalog: &SongCatalog,
        created_by: &BandMember,
    ) -> GenerateResult<Setlist> {
        let mut rng = StdRng::from_entropy();
        self.generate_with_rng(catalog, created_by, &mut rng)
    }

    /// Generate a setlist drawing randomness from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        catalog: &SongCatalog,
        created_by: &BandMember,
        rng: &mut R,
    ) -> GenerateResult<Setlist> {
        self.generate_at(catalog, created_by, rng, Utc::now())
    }

    /// Generate a setlist stamped with `now`.
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        catalog: &SongCatalog,
        created_by: &BandMember,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> GenerateResult<Setlist> {
        let mut pool = catalog.active_songs();
        if pool.is_empty() {
            log::warn!("Setlist requested but the catalog has no active songs");
            return Err(GenerateError::NoActiveSongs);
        }

        log::debug!(
            "Drawing up to {} sets of {} from {} active songs",
            self.settings.num_sets(),
            self.settings.songs_per_set(),
            pool.len()
        );

        pool.shuffle(rng);

        let sets: Vec<Set> = pool
            .chunks(self.settings.songs_per_set())
            .take(self.settings.num_sets())
            .map(|chunk| Set::new(chunk.iter().map(|song| SongRef::snapshot(song)).collect()))
            .collect();

        let setlist = Setlist::new(created_by.name.clone(), now, sets);

        log::info!(
            "Generated '{}' for {}: {} sets, {} songs",
            setlist.name(),
            setlist.created_by(),
            setlist.sets().len(),
            setlist.song_count()
        );

        Ok(setlist)
    }
}
