//! Lookup from card names to card data.
//!
//! Getting a card's name from the game can be slow, so we read every name once and keep a map
//! from the lowercase name to the positions of the cards that have it. Art file names are
//! matched against this map, so the lowercase form also lets art live on case-insensitive file
//! systems.

use std::collections::HashMap;

use eyre::{format_err, Result};

use crate::game::CardData;

/// Returns the key that `name` is stored under.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

#[derive(Debug, Default)]
pub struct CardIndex {
    /// Maps lowercase English names to positions in the card slice the index was built from.
    ///
    /// Some cards (such as Blazing Bolts) have several definitions with the same name, so each
    /// name maps to every position that has it, in the game's order.
    positions_by_name: HashMap<String, Vec<usize>>,

    card_count: usize,
}

impl CardIndex {
    /// Indexes `cards` by name.
    ///
    /// Every card must have a name. A card without one means we're looking at data we don't
    /// understand, so the whole build fails instead of quietly leaving the card out.
    pub fn build<C: CardData>(cards: &[C]) -> Result<CardIndex> {
        let mut positions_by_name: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, card) in cards.iter().enumerate() {
            let name = match card.name_english() {
                Some(name) if !name.is_empty() => name,
                Some(_) => {
                    return Err(format_err!("Card at position {} has an empty name", position))
                }
                None => return Err(format_err!("Card at position {} has no name", position)),
            };

            positions_by_name
                .entry(name_key(name))
                .or_default()
                .push(position);
        }

        log::debug!(
            "Indexed {} cards under {} names",
            cards.len(),
            positions_by_name.len()
        );

        Ok(CardIndex {
            positions_by_name,
            card_count: cards.len(),
        })
    }

    /// Returns the positions of the cards whose name has the key `key`, or `None` if there aren't
    /// any.
    pub fn get(&self, key: &str) -> Option<&[usize]> {
        self.positions_by_name.get(key).map(Vec::as_slice)
    }

    /// The number of distinct names.
    pub fn len(&self) -> usize {
        self.positions_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions_by_name.is_empty()
    }

    /// The number of cards indexed, counting cards that share names separately.
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.positions_by_name.keys().map(String::as_str)
    }
}
