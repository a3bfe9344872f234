//! Deck file loader (.ydk format)

use crate::core::{CardId, Deck, Section};
use crate::Result;
use std::fs;
use std::path::Path;

/// Deck loader for .ydk files
pub struct YdkLoader;

impl YdkLoader {
    /// Load a deck from a .ydk file
    pub fn load_from_file(path: &Path) -> Result<Deck> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse a deck from its text content
    ///
    /// The format is line-oriented: `#main` and `#extra` open the main and
    /// extra sections, `!side` opens the side section, and every other line
    /// is either a passcode belonging to the current section, a `#` comment,
    /// or noise. Unparsable lines are skipped, not rejected - .ydk files in
    /// the wild carry creator tags, card names, and stray text, and there is
    /// no reliable way to tell a comment from garbage. Callers that want an
    /// error for a deck with no cards at all should check `Deck::is_empty`.
    pub fn parse(content: &str) -> Deck {
        let mut deck = Deck::new();
        let mut current_section: Option<Section> = None;

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            match line {
                "#main" => {
                    current_section = Some(Section::Main);
                    continue;
                }
                "#extra" => {
                    current_section = Some(Section::Extra);
                    continue;
                }
                "!side" => {
                    current_section = Some(Section::Side);
                    continue;
                }
                _ => {}
            }

            // Any other #-line is a comment and leaves the section alone
            if line.starts_with('#') {
                continue;
            }

            let Some(section) = current_section else {
                continue;
            };

            // Passcodes are u32; anything else (including negative text) is
            // skipped under the same permissive policy
            if let Ok(id) = line.parse::<u32>() {
                deck.section_mut(section).push(CardId::new(id));
            }
        }

        deck
    }

    /// Write a deck back out as .ydk text
    ///
    /// Inverse of `parse`: `parse(&serialize(&deck))` reproduces `deck`
    /// exactly.
    pub fn serialize(deck: &Deck) -> String {
        let mut out = String::new();
        for (directive, cards) in [
            ("#main", &deck.main),
            ("#extra", &deck.extra),
            ("!side", &deck.side),
        ] {
            out.push_str(directive);
            out.push('\n');
            for id in cards {
                out.push_str(&id.to_string());
                out.push('\n');
            }
        }
        out
    }
}
