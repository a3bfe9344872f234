//! Canonical deck representation shared by every format decoder

use serde::{Deserialize, Serialize};
use std::fmt;

/// Passcode identifying a card
///
/// Passcodes are opaque 32-bit integers; the decoders perform no validation
/// against a card database. These IDs are stable across formats - the same
/// card carries the same passcode in a .ydk file, a YDKE URL, and an Omega
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(u32);

impl CardId {
    pub fn new(id: u32) -> Self {
        CardId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three partitions of a deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Main,
    Extra,
    Side,
}

impl Section {
    /// All sections in their conventional order
    pub const ALL: [Section; 3] = [Section::Main, Section::Extra, Section::Side];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Main => write!(f, "main"),
            Section::Extra => write!(f, "extra"),
            Section::Side => write!(f, "side"),
        }
    }
}

/// A complete deck list
///
/// Each section preserves encounter order from the source format, and
/// duplicates are meaningful - they represent multiple physical copies.
/// Decoders never reorder or deduplicate; grouping by copy count is a
/// display concern (see `stats::group_counts`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub main: Vec<CardId>,
    pub extra: Vec<CardId>,
    pub side: Vec<CardId>,
}

impl Deck {
    pub fn new() -> Self {
        Deck::default()
    }

    pub fn section(&self, section: Section) -> &[CardId] {
        match section {
            Section::Main => &self.main,
            Section::Extra => &self.extra,
            Section::Side => &self.side,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut Vec<CardId> {
        match section {
            Section::Main => &mut self.main,
            Section::Extra => &mut self.extra,
            Section::Side => &mut self.side,
        }
    }

    /// True when all three sections are empty
    ///
    /// The decoders happily produce empty decks (a .ydk file with no
    /// recognizable card lines, for instance); whether that constitutes a
    /// failure is the caller's policy.
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.extra.is_empty() && self.side.is_empty()
    }

    /// Total cards across all three sections
    pub fn total_cards(&self) -> usize {
        self.main.len() + self.extra.len() + self.side.len()
    }
}
