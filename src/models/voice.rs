//! Percussion voices
//!
//! The four fixed instruments of the drum staff. Each voice sits on a
//! fixed line/space position and is drawn with a fixed head shape and
//! stem direction. The table is static and never changes at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::EditError;

/// Identifier of a percussion voice
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VoiceId {
    #[serde(rename = "hh")]
    HiHat,
    #[serde(rename = "sn")]
    Snare,
    #[serde(rename = "tom")]
    Tom,
    #[serde(rename = "kick")]
    Kick,
}

/// Notehead shape
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HeadShape {
    Circle,
    Cross,
}

/// Stem direction
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StemDirection {
    Up,
    Down,
}

/// Static description of one voice
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Voice {
    pub id: VoiceId,
    pub name: &'static str,
    /// Staff position in half line-spacings, 1 = top line
    pub position: i32,
    pub head: HeadShape,
    pub stem: StemDirection,
}

/// All voices in display order (top of the legend first)
pub const VOICES: [Voice; 4] = [
    Voice {
        id: VoiceId::HiHat,
        name: "Hi-Hat",
        position: 0,
        head: HeadShape::Cross,
        stem: StemDirection::Up,
    },
    Voice {
        id: VoiceId::Snare,
        name: "Snare",
        position: 4,
        head: HeadShape::Circle,
        stem: StemDirection::Up,
    },
    Voice {
        id: VoiceId::Tom,
        name: "Tom",
        position: 2,
        head: HeadShape::Circle,
        stem: StemDirection::Up,
    },
    Voice {
        id: VoiceId::Kick,
        name: "Kick",
        position: 8,
        head: HeadShape::Circle,
        stem: StemDirection::Down,
    },
];

impl VoiceId {
    /// Short code used on the JS side ("hh", "sn", "tom", "kick")
    pub fn code(self) -> &'static str {
        match self {
            VoiceId::HiHat => "hh",
            VoiceId::Snare => "sn",
            VoiceId::Tom => "tom",
            VoiceId::Kick => "kick",
        }
    }

    /// Parse a short code
    pub fn parse(code: &str) -> Result<Self, EditError> {
        VOICES
            .iter()
            .map(|v| v.id)
            .find(|id| id.code() == code)
            .ok_or_else(|| EditError::UnknownVoice(code.to_string()))
    }

    /// Position of this voice in `VOICES`, used as the secondary sort key
    pub fn display_order(self) -> usize {
        match self {
            VoiceId::HiHat => 0,
            VoiceId::Snare => 1,
            VoiceId::Tom => 2,
            VoiceId::Kick => 3,
        }
    }

    pub fn voice(self) -> &'static Voice {
        &VOICES[self.display_order()]
    }
}

impl fmt::Display for VoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
