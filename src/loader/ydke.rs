//! YDKE URL decoding and encoding
//!
//! A YDKE URL packs the three deck sections as base64 little-endian u32
//! arrays: `ydke://<main>!<extra>!<side>!`

use crate::core::{CardId, Deck};
use crate::{DeckError, Result};
use base64::prelude::BASE64_STANDARD;
use base64::Engine;

/// Scheme prefix every YDKE URL must carry
pub const YDKE_PREFIX: &str = "ydke://";

/// Parse a YDKE URL into a deck
pub fn parse_url(url: &str) -> Result<Deck> {
    let Some(rest) = url.strip_prefix(YDKE_PREFIX) else {
        return Err(DeckError::UnrecognizedProtocol(url.to_string()));
    };

    let components: Vec<&str> = rest.split('!').collect();
    if components.len() < 3 {
        return Err(DeckError::MissingComponent(components.len()));
    }

    // Components past the third (e.g. the empty segment after a trailing
    // '!') are ignored
    Ok(Deck {
        main: passcodes_from_base64(components[0])?,
        extra: passcodes_from_base64(components[1])?,
        side: passcodes_from_base64(components[2])?,
    })
}

/// Encode a deck as a YDKE URL
///
/// Left-inverse companion of `parse_url`. The trailing `!` matches the URLs
/// produced by deck-building tools; `parse_url` ignores the empty segment it
/// creates.
pub fn to_url(deck: &Deck) -> String {
    format!(
        "{}{}!{}!{}!",
        YDKE_PREFIX,
        passcodes_to_base64(&deck.main),
        passcodes_to_base64(&deck.extra),
        passcodes_to_base64(&deck.side),
    )
}

/// Decode one base64 segment into passcodes
fn passcodes_from_base64(segment: &str) -> Result<Vec<CardId>> {
    let bytes = BASE64_STANDARD
        .decode(segment)
        .map_err(|e| DeckError::MalformedEncoding(e.to_string()))?;

    if bytes.len() % 4 != 0 {
        return Err(DeckError::MalformedEncoding(format!(
            "segment length {} is not a multiple of 4 bytes",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|b| CardId::new(u32::from_le_bytes([b[0], b[1], b[2], b[3]])))
        .collect())
}

fn passcodes_to_base64(ids: &[CardId]) -> String {
    let mut bytes = Vec::with_capacity(ids.len() * 4);
    for id in ids {
        bytes.extend_from_slice(&id.as_u32().to_le_bytes());
    }
    BASE64_STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_card_sections() {
        // Each segment is one u32: 1, 2, 3
        let url = "ydke://AQAAAA==!AgAAAA==!AwAAAA==";
        let deck = parse_url(url).unwrap();

        assert_eq!(deck.main, vec![CardId::new(1)]);
        assert_eq!(deck.extra, vec![CardId::new(2)]);
        assert_eq!(deck.side, vec![CardId::new(3)]);
    }

    #[test]
    fn test_wrong_scheme() {
        let err = parse_url("foo://AAAAAA==!AAAAAA==!AAAAAA==").unwrap_err();
        assert!(matches!(err, DeckError::UnrecognizedProtocol(_)));
    }

    #[test]
    fn test_too_few_components() {
        let err = parse_url("ydke://AAAAAA==!AAAAAA==").unwrap_err();
        assert!(matches!(err, DeckError::MissingComponent(2)));
    }

    #[test]
    fn test_invalid_base64() {
        let err = parse_url("ydke://not-base64!!AAAAAA==!AAAAAA==").unwrap_err();
        assert!(matches!(err, DeckError::MalformedEncoding(_)));
    }

    #[test]
    fn test_misaligned_segment() {
        // "AAAA" decodes to 3 bytes, which cannot form a u32
        let err = parse_url("ydke://AAAA!AAAAAA==!AAAAAA==").unwrap_err();
        assert!(matches!(err, DeckError::MalformedEncoding(_)));
    }

    #[test]
    fn test_empty_segments_allowed() {
        let deck = parse_url("ydke://!!").unwrap();
        assert!(deck.is_empty());
    }

    #[test]
    fn test_extra_components_ignored() {
        let deck = parse_url("ydke://AQAAAA==!!!junk that is not base64").unwrap();
        assert_eq!(deck.main, vec![CardId::new(1)]);
    }

    #[test]
    fn test_roundtrip() {
        let deck = Deck {
            main: vec![CardId::new(34541863), CardId::new(34541863), CardId::new(1)],
            extra: vec![CardId::new(u32::MAX)],
            side: vec![],
        };

        assert_eq!(parse_url(&to_url(&deck)).unwrap(), deck);
    }
}
