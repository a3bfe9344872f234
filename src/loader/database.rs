//! Card database for looking up card descriptors
//!
//! Backed by a local JSON snapshot; lookups are idempotent and never
//! re-parse, so callers may resolve the same passcode repeatedly.

use crate::core::{CardId, CardInfo};
use crate::{DeckError, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One record of the JSON snapshot: a passcode plus its descriptor
#[derive(Deserialize)]
struct CardRecord {
    id: u32,
    #[serde(flatten)]
    info: CardInfo,
}

/// Database of card descriptors keyed by passcode
pub struct CardDatabase {
    cards: FxHashMap<CardId, CardInfo>,
}

impl CardDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        CardDatabase {
            cards: FxHashMap::default(),
        }
    }

    /// Load a database from a JSON file
    ///
    /// The file holds an array of card records, each with an `id` field
    /// alongside the descriptor fields.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let records: Vec<CardRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| DeckError::DatabaseError(e.to_string()))?;

        let mut db = CardDatabase::new();
        for record in records {
            db.add_card(CardId::new(record.id), record.info);
        }
        Ok(db)
    }

    /// Add a single card descriptor to the database
    pub fn add_card(&mut self, id: CardId, info: CardInfo) {
        self.cards.insert(id, info);
    }

    /// Look up a card by passcode
    pub fn get(&self, id: CardId) -> Option<&CardInfo> {
        self.cards.get(&id)
    }

    /// Look up a card, substituting a placeholder for unknown passcodes
    pub fn lookup(&self, id: CardId) -> CardInfo {
        self.get(id)
            .cloned()
            .unwrap_or_else(|| CardInfo::placeholder(id))
    }

    /// Check if a passcode exists in the database
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Total number of cards in the database
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the database is empty
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for CardDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_database() {
        let db = CardDatabase::new();
        assert_eq!(db.len(), 0);
        assert!(db.is_empty());
        assert!(db.get(CardId::new(46986414)).is_none());
    }

    #[test]
    fn test_lookup_falls_back_to_placeholder() {
        let db = CardDatabase::new();
        let card = db.lookup(CardId::new(42));
        assert_eq!(card.name, "Card #42");
        assert_eq!(card.card_type, "Unknown");
    }

    #[test]
    fn test_manual_add() {
        let mut db = CardDatabase::new();
        let id = CardId::new(46986414);

        let mut info = CardInfo::placeholder(id);
        info.name = "Dark Magician".to_string();
        info.card_type = "Normal Monster".to_string();
        db.add_card(id, info);

        assert_eq!(db.len(), 1);
        assert!(db.contains(id));
        assert_eq!(db.get(id).unwrap().name, "Dark Magician");
        assert_eq!(db.lookup(id).name, "Dark Magician");
    }

    #[test]
    fn test_parse_records_json() {
        let json = r#"[
            {"id": 46986414, "name": "Dark Magician", "type": "Normal Monster",
             "attribute": "DARK", "race": "Spellcaster", "level": 7,
             "atk": 2500, "def": 2100},
            {"id": 55144522, "name": "Pot of Greed", "type": "Spell Card"}
        ]"#;

        let records: Vec<CardRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 46986414);
        assert_eq!(records[0].info.level, Some(7));
        assert_eq!(records[1].info.card_type, "Spell Card");
    }
}
