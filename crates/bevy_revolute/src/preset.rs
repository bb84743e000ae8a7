use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named, fixed vector of target angles for all joints, in degrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandPreset {
    pub name: String,
    pub angles: Vec<f32>,
}

/// Read-only collection of [`HandPreset`]s, loaded once at startup.
///
/// The on-disk JSON schema is `{ "configurations": [ { "name", "angles" } ] }`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct HandPresetSet {
    pub configurations: Vec<HandPreset>,
}

impl HandPresetSet {
    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HandPreset> {
        self.configurations.get(index)
    }

    /// Strict indexed lookup, in contrast to the tick-time length tolerance.
    pub fn checked_get(&self, index: usize) -> Result<&HandPreset, PresetIndexError> {
        self.configurations.get(index).ok_or(PresetIndexError {
            index,
            len: self.configurations.len(),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configurations.iter().map(|preset| preset.name.as_str())
    }
}

/// Out-of-range preset selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("preset index {index} out of range (0..{len})")]
pub struct PresetIndexError {
    pub index: usize,
    pub len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset_set() -> HandPresetSet {
        HandPresetSet {
            configurations: vec![
                HandPreset {
                    name: "Default".to_string(),
                    angles: vec![10.0, 20.0, 30.0],
                },
                HandPreset {
                    name: "Closed".to_string(),
                    angles: vec![45.0, 45.0, 45.0],
                },
            ],
        }
    }

    #[test]
    fn checked_get_in_range() {
        let presets = preset_set();
        assert_eq!(presets.checked_get(1).unwrap().name, "Closed");
    }

    #[test]
    fn checked_get_out_of_range() {
        let presets = preset_set();
        let err = presets.checked_get(2).unwrap_err();
        assert_eq!(err, PresetIndexError { index: 2, len: 2 });
    }

    #[test]
    fn deserializes_on_disk_schema() {
        let json = r#"{
            "configurations": [
                { "name": "Default", "angles": [10.0, 20.0, 30.0] }
            ]
        }"#;

        let presets: HandPresetSet = serde_json::from_str(json).unwrap();
        assert_eq!(presets.len(), 1);
        assert_eq!(presets.get(0).unwrap().angles, vec![10.0, 20.0, 30.0]);
        assert_eq!(presets.names().collect::<Vec<_>>(), vec!["Default"]);
    }
}
