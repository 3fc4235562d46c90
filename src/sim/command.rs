//! Discrete commands produced by the input layer

use serde::{Deserialize, Serialize};

use super::state::Kind;

/// One fire-and-forget state transition
///
/// Serialized externally tagged, e.g. `"SpawnRock"` or `{"SetCap": 40}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    SpawnRock,
    SpawnPaper,
    SpawnScissors,
    ClearAll,
    TogglePause,
    SpeedUp,
    SpeedDown,
    /// Raw slider value, clamped into the cap range when applied
    SetCap(f32),
    ToggleUiVisibility,
    /// Any non-toggle key brings the control panel back
    ShowUi,
}

impl Command {
    pub fn spawn(kind: Kind) -> Self {
        match kind {
            Kind::Rock => Command::SpawnRock,
            Kind::Paper => Command::SpawnPaper,
            Kind::Scissors => Command::SpawnScissors,
        }
    }

    /// Parse a JSON command, returning None for unknown or malformed input
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match serde_json::from_value(value.clone()) {
            Ok(command) => Some(command),
            Err(e) => {
                log::warn!("Ignoring unrecognized command {}: {}", value, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spawn_for_kind() {
        assert_eq!(Command::spawn(Kind::Rock), Command::SpawnRock);
        assert_eq!(Command::spawn(Kind::Paper), Command::SpawnPaper);
        assert_eq!(Command::spawn(Kind::Scissors), Command::SpawnScissors);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Command::from_json(&json!("ClearAll")), Some(Command::ClearAll));
        assert_eq!(
            Command::from_json(&json!({ "SetCap": 42.0 })),
            Some(Command::SetCap(42.0))
        );
        assert_eq!(Command::from_json(&json!("Explode")), None);
        assert_eq!(Command::from_json(&json!({ "SetCap": "lots" })), None);
        assert_eq!(Command::from_json(&json!(17)), None);
    }
}
