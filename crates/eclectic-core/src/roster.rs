//! The band roster: a fixed list of members used to attribute setlists and
//! to pick singers.
//!
//! The roster is configuration data. It is either the built-in default band
//! or loaded from a TOML file of `[[members]]` tables:
//!
//! ```toml
//! [[members]]
//! name = "Kevin Sherlock"
//! email = "kevin@example.com"
//! instrument = "Drums"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::BandMember;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    members: Vec<BandMember>,
}

impl Roster {
    /// Build a roster from members. An empty list is rejected.
    pub fn new(members: Vec<BandMember>) -> Result<Self> {
        if members.is_empty() {
            return Err(Error::InvalidData("roster has no members".to_string()));
        }
        Ok(Self { members })
    }

    /// The Radio Eclectic line-up.
    #[must_use]
    pub fn default_band() -> Self {
        Self {
            members: vec![
                BandMember::new("Kevin Sherlock", "kevin@example.com", "Drums"),
                BandMember::new("Mark Cover", "mark@example.com", "Guitar"),
                BandMember::new("Ward Reesman", "ward@example.com", "Electric Guitar"),
                BandMember::new("Matt Donelan", "matt@example.com", "Bass"),
            ],
        }
    }

    /// Load a roster from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let roster: Self = toml::from_str(&content).map_err(|e| {
            Error::InvalidData(format!(
                "failed to parse roster from {}: {}",
                path.display(),
                e
            ))
        })?;
        log::debug!("Loaded {} roster members from {}", roster.members.len(), path.display());
        Self::new(roster.members)
    }

    #[must_use]
    pub fn members(&self) -> &[BandMember] {
        &self.members
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }

    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&BandMember> {
        let email = email.trim();
        self.members
            .iter()
            .find(|m| m.email.eq_ignore_ascii_case(email))
    }

    /// Look a member up by email, falling back to a case-insensitive name
    /// match.
    #[must_use]
    pub fn find(&self, email_or_name: &str) -> Option<&BandMember> {
        self.find_by_email(email_or_name).or_else(|| {
            let wanted = email_or_name.trim().to_lowercase();
            self.members.iter().find(|m| m.name.to_lowercase() == wanted)
        })
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::default_band()
    }
}
