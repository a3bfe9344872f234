//! Deck format loaders
//!
//! Decoders for the .ydk text format, YDKE URLs, and the Omega compressed
//! format, plus the card database used to enrich decoded decks

pub mod cursor;
pub mod database;
pub mod omega;
pub mod ydk;
pub mod ydke;

pub use cursor::ByteCursor;
pub use database::CardDatabase;
pub use omega::OmegaCodec;
pub use ydk::YdkLoader;
pub use ydke::{parse_url, to_url, YDKE_PREFIX};
