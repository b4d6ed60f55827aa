use serde::{Deserialize, Serialize};

/// Upper bound on sets offered by the generator controls.
pub const MAX_SETS: usize = 5;

/// Upper bound on songs per set offered by the generator controls.
pub const MAX_SONGS_PER_SET: usize = 20;

/// Shape of a generated setlist. Both values are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SettingsShape")]
pub struct GeneratorSettings {
    num_sets: usize,
    songs_per_set: usize,
}

/// Serialized form of [`GeneratorSettings`], clamped on the way in.
#[derive(Debug, Deserialize)]
struct SettingsShape {
    num_sets: usize,
    songs_per_set: usize,
}

impl From<SettingsShape> for GeneratorSettings {
    fn from(shape: SettingsShape) -> Self {
        Self::new(shape.num_sets, shape.songs_per_set)
    }
}

impl GeneratorSettings {
    /// Build settings, raising any value below 1 to 1.
    #[must_use]
    pub fn new(num_sets: usize, songs_per_set: usize) -> Self {
        Self {
            num_sets: num_sets.max(1),
            songs_per_set: songs_per_set.max(1),
        }
    }

    #[must_use]
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    #[must_use]
    pub const fn songs_per_set(&self) -> usize {
        self.songs_per_set
    }

    /// Most songs a setlist with these settings can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.num_sets.saturating_mul(self.songs_per_set)
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::new(2, 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.num_sets(), 2);
        assert_eq!(settings.songs_per_set(), 8);
        assert_eq!(settings.capacity(), 16);
    }

    #[test]
    fn test_new_clamps_to_one() {
        let settings = GeneratorSettings::new(0, 0);
        assert_eq!(settings.num_sets(), 1);
        assert_eq!(settings.songs_per_set(), 1);
    }

    #[test]
    fn test_deserialize_clamps_to_one() {
        let settings: GeneratorSettings =
            serde_json::from_str(r#"{"num_sets":0,"songs_per_set":0}"#).unwrap();
        assert_eq!(settings, GeneratorSettings::new(1, 1));
    }

    #[test]
    fn test_serialize_round_trip() {
        let settings = GeneratorSettings::new(3, 12);
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"num_sets":3,"songs_per_set":12}"#);
        let back: GeneratorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
