use serde::{Deserialize, Serialize};

/// A member of the band. Roster entries are reference data and are never
/// edited by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BandMember {
    pub name: String,
    pub email: String,
    pub instrument: String,
}

impl BandMember {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        instrument: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            instrument: instrument.into(),
        }
    }
}
