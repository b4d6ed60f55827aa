//! The bulk import parser.
//!
//! Text is read whole: the first line is the header, every later non-blank
//! line is a data row. [`BulkImportParser::preview`] and
//! [`BulkImportParser::parse`] each start from the raw text; nothing is
//! cached between them.

use std::collections::HashSet;

use eclectic_core::{Song, SongCatalog, SongDraft};

use crate::error::{ImportError, ImportResult};
use crate::fields::{HeaderMap, RawRow};

/// Largest import accepted by default (1 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Number of data rows shown in a preview.
pub const PREVIEW_ROWS: usize = 5;

/// Parses tab-separated song sheets.
#[derive(Debug, Clone, Copy)]
pub struct BulkImportParser {
    max_input_bytes: usize,
}

impl Default for BulkImportParser {
    fn default() -> Self {
        Self::new()
    }
}

impl BulkImportParser {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    #[must_use]
    pub const fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = limit;
        self
    }

    #[must_use]
    pub const fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    /// The first [`PREVIEW_ROWS`] non-blank data rows, trimmed but not
    /// validated. Only the active flag is coerced; numeric cells show their
    /// raw text. Blank text previews as nothing.
    #[must_use]
    pub fn preview(&self, text: &str) -> Vec<RawRow> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut lines = text.lines();
        let headers = HeaderMap::parse(lines.next().unwrap_or_default());
        lines
            .filter(|line| !line.trim().is_empty())
            .take(PREVIEW_ROWS)
            .map(|line| RawRow::extract(line, &headers).with_active_flag())
            .collect()
    }

    /// Parse `text` into drafts, dropping rows without a name or artist.
    pub fn parse_drafts(&self, text: &str) -> ImportResult<Vec<SongDraft>> {
        if text.trim().is_empty() {
            return Err(ImportError::EmptyInput);
        }
        if text.len() > self.max_input_bytes {
            return Err(ImportError::InputTooLarge {
                size: text.len(),
                limit: self.max_input_bytes,
            });
        }

        let mut lines = text.lines();
        let headers = HeaderMap::parse(lines.next().unwrap_or_default());
        log::debug!(
            "Import header has {} columns, {} recognized",
            headers.len(),
            headers.recognized().len()
        );

        let mut dropped = 0usize;
        let drafts: Vec<SongDraft> = lines
            .filter(|line| !line.trim().is_empty())
            .map(|line| RawRow::extract(line, &headers))
            .filter(|row| {
                let keep = row.is_acceptable();
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .map(|row| row.to_draft())
            .collect();

        if dropped > 0 {
            log::debug!("Dropped {} rows without a name or artist", dropped);
        }

        if drafts.is_empty() {
            return Err(ImportError::NoValidRows);
        }

        Ok(drafts)
    }

    /// Parse `text` into songs whose ids are unused by `catalog` and by each
    /// other. The catalog is not modified.
    pub fn parse(&self, text: &str, catalog: &SongCatalog) -> ImportResult<Vec<Song>> {
        let drafts = self.parse_drafts(text)?;

        let mut taken = HashSet::with_capacity(drafts.len());
        let songs = drafts
            .into_iter()
            .map(|draft| {
                let id = loop {
                    let id = catalog.fresh_id();
                    if taken.insert(id) {
                        break id;
                    }
                };
                Song::from_draft(id, draft)
            })
            .collect();

        Ok(songs)
    }

    /// Parse `text` and append the accepted songs to `catalog`.
    ///
    /// Returns the number of songs added. On error the catalog is unchanged.
    pub fn import_into(&self, text: &str, catalog: &mut SongCatalog) -> ImportResult<usize> {
        let songs = self.parse(text, catalog)?;
        let count = catalog.add_all(songs)?;
        log::info!("Imported {} songs", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::ImportField;
    use eclectic_core::Active;

    const SHEET: &str = "SongName\tArtist\tSongActive\tSinger\tSongKey\tSongBPM\tVoxDifficulty\tTREConfidence\tMarkGuitar\tSongLink_Artist
6th Avenue Heartache\tWallflowers\tY\tMark\tA\t80\t1\t4.75\tAcoustic\thttps://youtu.be/a
  One Headlight \t Wallflowers \tn\tWard\tG\t104\t2\t3.5\tElectric\t

\tNo Name\tY\tKevin\tC\t90\t1\t2\t\t
Wagon Wheel\tOld Crow Medicine Show\t\tMatt\tA\tfast\t\t\t\t
";

    #[test]
    fn test_spec_example_drops_row_without_name() {
        let text = "SongName\tArtist\tSongActive\nFoo\tBar\tY\n\tBaz\tY";
        let drafts = BulkImportParser::new().parse_drafts(text).unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].name, "Foo");
        assert_eq!(drafts[0].artist, "Bar");
    }

    #[test]
    fn test_unparseable_bpm_defaults_to_zero() {
        let text = "SongName\tArtist\tSongBPM\nFoo\tBar\tabc";
        let drafts = BulkImportParser::new().parse_drafts(text).unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].original_tempo, 0);
        assert_eq!(drafts[0].tre_tempo, 0);
    }

    #[test]
    fn test_full_sheet() {
        let drafts = BulkImportParser::new().parse_drafts(SHEET).unwrap();
        let names: Vec<&str> = drafts.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["6th Avenue Heartache", "One Headlight", "Wagon Wheel"]);

        assert_eq!(drafts[1].name, "One Headlight");
        assert_eq!(drafts[1].artist, "Wallflowers");
        assert_eq!(drafts[1].active, Active::No);

        let wagon = &drafts[2];
        assert_eq!(wagon.active, Active::Yes);
        assert_eq!(wagon.tre_tempo, 0);
        assert_eq!(wagon.vox_difficulty, 1);
        assert!(wagon.confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_input() {
        let parser = BulkImportParser::new();
        assert!(matches!(parser.parse_drafts(""), Err(ImportError::EmptyInput)));
        assert!(matches!(
            parser.parse_drafts("  \n\t\n"),
            Err(ImportError::EmptyInput)
        ));
    }

    #[test]
    fn test_header_only_has_no_valid_rows() {
        let parser = BulkImportParser::new();
        assert!(matches!(
            parser.parse_drafts("SongName\tArtist\n\n"),
            Err(ImportError::NoValidRows)
        ));
    }

    #[test]
    fn test_missing_artist_header_has_no_valid_rows() {
        let parser = BulkImportParser::new();
        assert!(matches!(
            parser.parse_drafts("SongName\tBand\nFoo\tBar"),
            Err(ImportError::NoValidRows)
        ));
    }

    #[test]
    fn test_input_too_large() {
        let parser = BulkImportParser::new().with_max_input_bytes(16);
        let err = parser
            .parse_drafts("SongName\tArtist\nFoo\tBar\n")
            .unwrap_err();
        assert!(matches!(err, ImportError::InputTooLarge { size: 24, limit: 16 }));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_crlf_lines() {
        let text = "SongName\tArtist\r\nFoo\tBar\r\nBaz\tQux\r\n";
        let drafts = BulkImportParser::new().parse_drafts(text).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[1].artist, "Qux");
    }

    #[test]
    fn test_parse_assigns_fresh_ids() {
        let mut catalog = SongCatalog::new();
        catalog.add(SongDraft::new("Existing", "Band")).unwrap();

        let songs = BulkImportParser::new().parse(SHEET, &catalog).unwrap();
        assert_eq!(songs.len(), 3);

        let ids: HashSet<_> = songs.iter().map(Song::id).collect();
        assert_eq!(ids.len(), 3);
        assert!(songs.iter().all(|s| !catalog.contains(s.id())));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_import_into_appends_in_order() {
        let mut catalog = SongCatalog::new();
        catalog.add(SongDraft::new("Existing", "Band")).unwrap();

        let count = BulkImportParser::new()
            .import_into(SHEET, &mut catalog)
            .unwrap();

        assert_eq!(count, 3);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.songs()[0].name, "Existing");
        assert_eq!(catalog.songs()[3].name, "Wagon Wheel");
    }

    #[test]
    fn test_import_failure_leaves_catalog_unchanged() {
        let mut catalog = SongCatalog::new();
        catalog.add(SongDraft::new("Existing", "Band")).unwrap();

        let err = BulkImportParser::new()
            .import_into("SongName\tArtist\n\tOnly Artist\n", &mut catalog)
            .unwrap_err();

        assert!(matches!(err, ImportError::NoValidRows));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_preview_is_raw_and_bounded() {
        let rows: String = (0..8)
            .map(|i| format!(" Song {i} \tArtist\tabc\n\n"))
            .collect();
        let text = format!("SongName\tArtist\tSongBPM\n{rows}");

        let preview = BulkImportParser::new().preview(&text);
        assert_eq!(preview.len(), PREVIEW_ROWS);
        assert_eq!(preview[0].get(ImportField::SongName), "Song 0");
        assert_eq!(preview[4].get(ImportField::SongName), "Song 4");
        assert_eq!(preview[0].get(ImportField::SongBpm), "abc");
    }

    #[test]
    fn test_preview_includes_rejected_rows() {
        let preview = BulkImportParser::new().preview(SHEET);
        assert_eq!(preview.len(), 4);
        assert_eq!(preview[2].get(ImportField::SongName), "");
        assert_eq!(preview[2].get(ImportField::Artist), "No Name");
    }

    #[test]
    fn test_preview_shows_imported_active_flag() {
        let text = "SongName\tArtist\tSongActive\tSongBPM\nA\tX\t\t90\nB\tY\ty\t\nC\tZ\tmaybe\t\nD\tW\t n \t\n";
        let preview = BulkImportParser::new().preview(text);
        let flags: Vec<&str> = preview
            .iter()
            .map(|row| row.get(ImportField::SongActive))
            .collect();
        assert_eq!(flags, vec!["Y", "Y", "N", "N"]);
        assert_eq!(preview[0].get(ImportField::SongBpm), "90");

        let drafts = BulkImportParser::new().parse_drafts(text).unwrap();
        let imported: Vec<&str> = drafts.iter().map(|d| d.active.as_str()).collect();
        assert_eq!(imported, flags);
    }

    #[test]
    fn test_preview_blank_text() {
        assert!(BulkImportParser::new().preview("   \n").is_empty());
    }
}
