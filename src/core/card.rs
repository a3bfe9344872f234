//! Card descriptors sourced from a card database

use crate::core::CardId;
use serde::{Deserialize, Serialize};

/// Externally-sourced description of a single card
///
/// Field names mirror the card-database JSON this tool consumes. The decoders
/// never touch these; only the statistics aggregator and the display layer
/// interpret them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardInfo {
    /// Card name (e.g., "Blue-Eyes White Dragon")
    pub name: String,

    /// Full type line (e.g., "Normal Monster", "Spell Card")
    #[serde(rename = "type")]
    pub card_type: String,

    /// Card text
    #[serde(default)]
    pub desc: String,

    /// Attribute (monsters only, e.g., "LIGHT")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,

    /// Monster race (e.g., "Dragon", "Spellcaster")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,

    /// Level, rank, or link rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,

    /// Attack points (monsters only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atk: Option<i32>,

    /// Defense points (monsters only; link monsters have none)
    #[serde(default, rename = "def", skip_serializing_if = "Option::is_none")]
    pub defense: Option<i32>,
}

impl CardInfo {
    /// True when the type line marks this card as a monster
    pub fn is_monster(&self) -> bool {
        self.card_type.contains("Monster")
    }

    /// Stand-in descriptor for a passcode the database does not know
    pub fn placeholder(id: CardId) -> Self {
        CardInfo {
            name: format!("Card #{id}"),
            card_type: "Unknown".to_string(),
            desc: "Card data not available".to_string(),
            attribute: None,
            race: None,
            level: None,
            atk: None,
            defense: None,
        }
    }
}
