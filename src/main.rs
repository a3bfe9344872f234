//! ygo - Yu-Gi-Oh! deck tool
//!
//! Command-line shell over the deck decoders: show a deck from any of the
//! three interchange formats, or convert between them

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use ygo_deck_rs::{
    core::{CardInfo, Deck, Section},
    loader::{parse_url, to_url, CardDatabase, OmegaCodec, YdkLoader},
    stats::{group_counts, DeckStats},
};

/// Target interchange format for conversion
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Line-oriented .ydk text
    Ydk,
    /// ydke:// URL
    Ydke,
    /// Omega compressed string
    Omega,
}

#[derive(Parser)]
#[command(name = "ygo")]
#[command(about = "Yu-Gi-Oh! deck decoder and converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a deck loaded from a .ydk file
    Show {
        /// Deck file (.ydk)
        deck: PathBuf,

        /// Card database JSON for names and statistics
        #[arg(long, value_name = "CARDS_JSON")]
        cards: Option<PathBuf>,

        /// Print the statistics block
        #[arg(long)]
        stats: bool,
    },

    /// Show a deck loaded from a YDKE URL
    Url {
        /// Deck URL (ydke://...)
        url: String,

        #[arg(long, value_name = "CARDS_JSON")]
        cards: Option<PathBuf>,

        #[arg(long)]
        stats: bool,
    },

    /// Show a deck loaded from an Omega format string
    Omega {
        /// Base64 Omega payload
        encoded: String,

        #[arg(long, value_name = "CARDS_JSON")]
        cards: Option<PathBuf>,

        #[arg(long)]
        stats: bool,
    },

    /// Convert a .ydk file to another format
    Convert {
        /// Deck file (.ydk)
        deck: PathBuf,

        /// Output format
        #[arg(long, value_enum)]
        to: Format,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { deck, cards, stats } => {
            let deck = load_ydk(&deck)?;
            show_deck(&deck, cards.as_deref(), stats)?;
        }
        Commands::Url { url, cards, stats } => {
            let deck = parse_url(&url)?;
            show_deck(&deck, cards.as_deref(), stats)?;
        }
        Commands::Omega {
            encoded,
            cards,
            stats,
        } => {
            let deck = OmegaCodec::decode(&encoded)?;
            show_deck(&deck, cards.as_deref(), stats)?;
        }
        Commands::Convert { deck, to } => {
            let deck = load_ydk(&deck)?;
            match to {
                Format::Ydk => print!("{}", YdkLoader::serialize(&deck)),
                Format::Ydke => println!("{}", to_url(&deck)),
                Format::Omega => println!("{}", OmegaCodec::encode(&deck)),
            }
        }
    }

    Ok(())
}

/// Load a .ydk file, rejecting decks with no recognizable cards
fn load_ydk(path: &Path) -> anyhow::Result<Deck> {
    let deck = YdkLoader::load_from_file(path)
        .with_context(|| format!("Failed to load deck file {}", path.display()))?;
    if deck.is_empty() {
        bail!("No valid cards found in {}", path.display());
    }
    Ok(deck)
}

fn show_deck(deck: &Deck, cards: Option<&Path>, stats: bool) -> anyhow::Result<()> {
    let db = match cards {
        Some(path) => Some(
            CardDatabase::load_from_file(path)
                .with_context(|| format!("Failed to load card database {}", path.display()))?,
        ),
        None => None,
    };

    println!(
        "Loaded {} main, {} extra, {} side cards",
        deck.main.len(),
        deck.extra.len(),
        deck.side.len()
    );

    for section in Section::ALL {
        let section_cards = deck.section(section);
        if section_cards.is_empty() {
            continue;
        }

        println!("\n[{section}] ({} cards)", section_cards.len());
        for (id, count) in group_counts(section_cards) {
            match &db {
                Some(db) => println!("  {count}x {} ({id})", db.lookup(id).name),
                None => println!("  {count}x {id}"),
            }
        }
    }

    if stats {
        // Without a database every card tallies as "Unknown"; section counts
        // are still accurate
        let computed = match &db {
            Some(db) => DeckStats::compute(deck, |id| db.lookup(id)),
            None => DeckStats::compute(deck, CardInfo::placeholder),
        };
        print_stats(&computed);
    }

    Ok(())
}

fn print_stats(stats: &DeckStats) {
    println!("\nCard types:");
    for (name, count) in sorted_by_count(&stats.card_types) {
        println!("  {count}x {name}");
    }

    if !stats.attributes.is_empty() {
        println!("\nAttributes:");
        for (name, count) in sorted_by_count(&stats.attributes) {
            println!("  {count}x {name}");
        }
    }

    if !stats.monster_races.is_empty() {
        println!("\nMonster races:");
        for (name, count) in sorted_by_count(&stats.monster_races) {
            println!("  {count}x {name}");
        }
    }

    if !stats.levels.is_empty() {
        println!("\nLevels:");
        let mut levels: Vec<_> = stats.levels.iter().collect();
        levels.sort_by_key(|(level, _)| **level);
        for (level, count) in levels {
            println!("  Level {level}: {count}");
        }
    }
}

/// Order a frequency map by descending count, then name, for stable output
fn sorted_by_count(map: &rustc_hash::FxHashMap<String, u32>) -> Vec<(&str, u32)> {
    let mut entries: Vec<(&str, u32)> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}
