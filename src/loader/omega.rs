//! Omega format decoding and encoding
//!
//! The Omega format is a base64-wrapped raw-deflate stream. The decompressed
//! payload is a fixed packed layout: a u8 count of main+extra cards, a u8
//! count of side cards, then that many little-endian u32 passcodes for each
//! run. Main and extra share one run; the boundary is reconstructed at a
//! fixed 40 cards.

use crate::core::{CardId, Deck};
use crate::loader::cursor::ByteCursor;
use crate::{DeckError, Result};
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Cards 1-40 of the combined main+extra run belong to the main deck.
/// A constant of the wire format, not a tunable.
const MAIN_DECK_SPLIT: usize = 40;

/// Codec for Omega deck strings
pub struct OmegaCodec;

impl OmegaCodec {
    /// Decode an Omega string into a deck
    pub fn decode(encoded: &str) -> Result<Deck> {
        let deflated = BASE64_STANDARD
            .decode(encoded.trim())
            .map_err(|e| DeckError::MalformedEncoding(e.to_string()))?;

        let raw = Self::inflate(&deflated)?;
        let mut cursor = ByteCursor::new(&raw);

        let main_extra_count = cursor.read_u8()? as usize;
        let side_count = cursor.read_u8()? as usize;

        let mut deck = Deck::new();
        for _ in 0..main_extra_count {
            let code = CardId::new(cursor.read_u32_le()?);
            if deck.main.len() < MAIN_DECK_SPLIT {
                deck.main.push(code);
            } else {
                deck.extra.push(code);
            }
        }
        for _ in 0..side_count {
            deck.side.push(CardId::new(cursor.read_u32_le()?));
        }

        Ok(deck)
    }

    /// Encode a deck as an Omega string
    ///
    /// Main and extra are written as one run, so a deck with fewer than 40
    /// main cards and a non-empty extra section cannot survive a round trip;
    /// the format simply has no way to mark the boundary.
    pub fn encode(deck: &Deck) -> String {
        let mut raw =
            Vec::with_capacity(2 + 4 * (deck.main.len() + deck.extra.len() + deck.side.len()));
        raw.push((deck.main.len() + deck.extra.len()) as u8);
        raw.push(deck.side.len() as u8);
        for id in deck.main.iter().chain(&deck.extra) {
            raw.extend_from_slice(&id.as_u32().to_le_bytes());
        }
        for id in &deck.side {
            raw.extend_from_slice(&id.as_u32().to_le_bytes());
        }

        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        // Writes to a Vec cannot fail
        encoder.write_all(&raw).unwrap();
        BASE64_STANDARD.encode(encoder.finish().unwrap())
    }

    /// Raw-deflate decompress (no zlib/gzip container)
    fn inflate(deflated: &[u8]) -> Result<Vec<u8>> {
        let mut raw = Vec::new();
        DeflateDecoder::new(deflated)
            .read_to_end(&mut raw)
            .map_err(|e| DeckError::DecompressionFailed(e.to_string()))?;
        Ok(raw)
    }
}
