//! Core rules engine. Keep this crate free of IO and platform concerns.

pub mod board;
pub mod burn;
pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod game;
pub mod hand;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod wild;

pub use board::*;
pub use burn::*;
pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use hand::*;
pub use rng::*;
pub use rules::*;
pub use scoring::*;
pub use wild::*;
