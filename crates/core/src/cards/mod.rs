//! Cards module - payment cards and their balances.

mod cards_model;

pub use cards_model::{Card, CardType, CardUpdate, NewCard};
