//! Statistics aggregation over a decoded deck with a card database

use similar_asserts::assert_eq;
use ygo_deck_rs::core::{CardId, CardInfo};
use ygo_deck_rs::loader::{CardDatabase, YdkLoader};
use ygo_deck_rs::stats::{group_counts, DeckStats};

fn sample_database() -> CardDatabase {
    let mut db = CardDatabase::new();

    db.add_card(
        CardId::new(89631139),
        CardInfo {
            name: "Blue-Eyes White Dragon".to_string(),
            card_type: "Normal Monster".to_string(),
            desc: String::new(),
            attribute: Some("LIGHT".to_string()),
            race: Some("Dragon".to_string()),
            level: Some(8),
            atk: Some(3000),
            defense: Some(2500),
        },
    );
    db.add_card(
        CardId::new(55144522),
        CardInfo {
            name: "Pot of Greed".to_string(),
            card_type: "Spell Card".to_string(),
            desc: String::new(),
            attribute: None,
            race: None,
            level: None,
            atk: None,
            defense: None,
        },
    );
    db
}

#[test]
fn test_stats_over_parsed_deck() {
    let deck = YdkLoader::parse(
        "#main\n89631139\n89631139\n89631139\n55144522\n#extra\n!side\n55144522\n",
    );
    let db = sample_database();

    let stats = DeckStats::compute(&deck, |id| db.lookup(id));

    assert_eq!(stats.main_count, 4);
    assert_eq!(stats.extra_count, 0);
    assert_eq!(stats.side_count, 1);

    assert_eq!(stats.card_types["Normal Monster"], 3);
    assert_eq!(stats.card_types["Spell Card"], 2);

    // Monster-only tallies draw from the three dragons
    assert_eq!(stats.attributes["LIGHT"], 3);
    assert_eq!(stats.monster_races["Dragon"], 3);
    assert_eq!(stats.levels[&8], 3);
}

#[test]
fn test_unknown_cards_tally_as_unknown() {
    let deck = YdkLoader::parse("#main\n1\n2\n1\n#extra\n!side\n");
    let db = CardDatabase::new();

    let stats = DeckStats::compute(&deck, |id| db.lookup(id));
    assert_eq!(stats.card_types["Unknown"], 3);
    assert!(stats.attributes.is_empty());
    assert!(stats.levels.is_empty());
}

#[test]
fn test_grouping_matches_display_order() {
    let deck = YdkLoader::parse("#main\n7\n8\n7\n7\n#extra\n!side\n");

    assert_eq!(
        group_counts(&deck.main),
        vec![(CardId::new(7), 3), (CardId::new(8), 1)]
    );
}
