pub mod ids;
pub mod member;
pub mod setlist;
pub mod song;

pub use ids::{SetlistId, SongId};
pub use member::BandMember;
pub use setlist::{Set, Setlist, SongRef};
pub use song::{Active, Song, SongDraft};
