//! The game's side of the mod. These traits describe what we need from the host's card data and
//! asset loading systems; the host (or a test) provides the implementations.

use std::path::PathBuf;

use eyre::Result;

/// A single card definition owned by the game.
pub trait CardData {
    /// The handle the game uses to refer to a card's art.
    type ArtRef;

    /// The English name of the card, as shown to an English-speaking player.
    fn name_english(&self) -> Option<&str>;

    /// Replaces the card's art with `art_ref`.
    fn set_art_ref(&mut self, art_ref: Self::ArtRef);
}

/// Access to the game's full set of card definitions.
pub trait GameData {
    type Card: CardData;

    /// Returns every card the game knows about, in the game's own order. This fails if the
    /// game hasn't finished loading its data yet.
    fn card_datas(&mut self) -> Result<&mut [Self::Card]>;
}

/// The kinds of asset the game can load from a mod.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
pub enum AssetType {
    CardArt,
}

/// Describes an asset that a mod wants the game to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetLoadingInfo {
    /// Path to the asset file, relative to `plugin_path`.
    pub file_path: String,

    /// The directory the mod is installed in.
    pub plugin_path: PathBuf,

    pub asset_type: AssetType,
}

/// The game's asset loading system.
pub trait AssetRegistry<Handle> {
    /// Builds a reference to the asset described by `info` and registers it with the game so that
    /// it can be loaded on demand.
    fn build_and_register(&mut self, info: &AssetLoadingInfo) -> Result<Handle>;
}


/// Stand-ins for the game's types.
#[cfg(test)]
pub(crate) mod test_game {
    use super::*;

    #[derive(Debug, Default)]
    pub struct TestCard {
        pub name: Option<String>,
        pub art: Option<String>,
        pub art_sets: usize,
    }

    impl TestCard {
        pub fn named(name: &str) -> TestCard {
            TestCard {
                name: Some(name.to_string()),
                ..Default::default()
            }
        }

        pub fn nameless() -> TestCard {
            TestCard::default()
        }
    }

    impl CardData for TestCard {
        type ArtRef = String;

        fn name_english(&self) -> Option<&str> {
            self.name.as_deref()
        }

        fn set_art_ref(&mut self, art_ref: String) {
            self.art = Some(art_ref);
            self.art_sets += 1;
        }
    }

    pub struct TestGame {
        pub cards: Vec<TestCard>,
        pub loaded: bool,
    }

    impl TestGame {
        pub fn with_names(names: &[&str]) -> TestGame {
            TestGame {
                cards: names.iter().map(|name| TestCard::named(name)).collect(),
                loaded: true,
            }
        }
    }

    impl GameData for TestGame {
        type Card = TestCard;

        fn card_datas(&mut self) -> Result<&mut [TestCard]> {
            eyre::ensure!(self.loaded, "Game data hasn't loaded yet");
            Ok(&mut self.cards)
        }
    }

    /// Hands out "<type>:<path>" strings as art handles, failing for any path in `rejected`.
    #[derive(Default)]
    pub struct TestRegistry {
        pub registered: Vec<AssetLoadingInfo>,
        pub rejected: Vec<String>,
    }

    impl AssetRegistry<String> for TestRegistry {
        fn build_and_register(&mut self, info: &AssetLoadingInfo) -> Result<String> {
            eyre::ensure!(
                !self.rejected.contains(&info.file_path),
                "Unable to load '{}'",
                info.file_path
            );

            self.registered.push(info.clone());
            Ok(format!("{}:{}", info.asset_type, info.file_path))
        }
    }
}
