//! Art Swap: replaces the pictures on cards with images from the mod's "assets" folder.
//!
//! Put an image named after a card's English name (for example "Deadweight.jpg") in the
//! "assets" folder beside the mod, and that card will use it as its art. Images can be JPEG or
//! PNG, and the extension must be lowercase. The base game's art is 972x1176, so images with the
//! same aspect ratio look best.
//!
//! Only card art is affected; the units that cards summon keep their normal look.

pub mod art;
pub mod game;
pub mod index;
pub mod logging;
pub mod paths;
pub mod plugin;

pub use art::{apply_art, list_art_files, replace_card_art, ArtFile, ResolveReport};
pub use game::{AssetLoadingInfo, AssetRegistry, AssetType, CardData, GameData};
pub use index::CardIndex;
pub use paths::ArtPaths;
pub use plugin::{ArtSwap, Initializable};

use eyre::{Context, Result};

/// Called by the game when it loads the mod. Starts logging to the file beside the mod and sets
/// up the mod with the game's systems. Art is swapped when the game calls
/// [`Initializable::initialize`] on the result.
pub fn load<G, A>(game: G, assets: A) -> Result<ArtSwap<G, A>>
where
    G: GameData,
    A: AssetRegistry<<G::Card as CardData>::ArtRef>,
{
    let paths = ArtPaths::resolve()?;

    logging::init(paths.log_path()).wrap_err("Unable to start logging")?;

    log::info!("Cargo package version is {}", env!("CARGO_PKG_VERSION"));

    Ok(ArtSwap::with_paths(paths, game, assets))
}
