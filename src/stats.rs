//! Deck statistics aggregation
//!
//! Pure tallies over a decoded deck and a passcode -> descriptor lookup.
//! The lookup is expected to be idempotent (see `CardDatabase`); this module
//! calls it once per physical copy and keeps no state of its own.

use crate::core::{CardId, CardInfo, Deck, Section};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Aggregated statistics for a deck
#[derive(Debug, Default, Serialize)]
pub struct DeckStats {
    /// Cards in the main deck
    pub main_count: usize,

    /// Cards in the extra deck
    pub extra_count: usize,

    /// Cards in the side deck
    pub side_count: usize,

    /// Copies per card type line, all sections combined
    pub card_types: FxHashMap<String, u32>,

    /// Copies per attribute, monsters only
    pub attributes: FxHashMap<String, u32>,

    /// Copies per monster race
    pub monster_races: FxHashMap<String, u32>,

    /// Copies per level/rank/link rating, monsters only
    pub levels: FxHashMap<u32, u32>,
}

impl DeckStats {
    /// Tally statistics for a deck
    ///
    /// `lookup` resolves each passcode to its descriptor; unknown cards
    /// should resolve to `CardInfo::placeholder`, which tallies under the
    /// `"Unknown"` type and contributes nothing to the monster maps.
    pub fn compute<F>(deck: &Deck, mut lookup: F) -> Self
    where
        F: FnMut(CardId) -> CardInfo,
    {
        let mut stats = DeckStats {
            main_count: deck.main.len(),
            extra_count: deck.extra.len(),
            side_count: deck.side.len(),
            ..DeckStats::default()
        };

        for section in Section::ALL {
            for &id in deck.section(section) {
                let card = lookup(id);

                *stats.card_types.entry(card.card_type.clone()).or_insert(0) += 1;

                if card.is_monster() {
                    if let Some(attribute) = card.attribute {
                        *stats.attributes.entry(attribute).or_insert(0) += 1;
                    }
                    if let Some(race) = card.race {
                        *stats.monster_races.entry(race).or_insert(0) += 1;
                    }
                    if let Some(level) = card.level {
                        *stats.levels.entry(level).or_insert(0) += 1;
                    }
                }
            }
        }

        stats
    }
}

/// Group a section's cards by passcode, preserving first-seen order
///
/// Returns `(passcode, copies)` pairs; the counts sum to the section length.
pub fn group_counts(cards: &[CardId]) -> Vec<(CardId, u32)> {
    let mut order: Vec<CardId> = Vec::new();
    let mut counts: FxHashMap<CardId, u32> = FxHashMap::default();

    for &id in cards {
        let count = counts.entry(id).or_insert(0);
        if *count == 0 {
            order.push(id);
        }
        *count += 1;
    }

    order.into_iter().map(|id| (id, counts[&id])).collect()
}
