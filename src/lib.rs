//! Yu-Gi-Oh! deck toolkit
//!
//! Decoders for the three common deck interchange formats (.ydk files,
//! YDKE URLs, and the Omega compressed format), a shared typed deck
//! representation, and statistics aggregation over decoded decks.

pub mod core;
pub mod error;
pub mod loader;
pub mod stats;

pub use error::{DeckError, Result};
