//! The mod's lifecycle: what happens when the game loads us, and what happens once the game's
//! data is ready.

use eyre::{Context, Result};

use crate::{
    art::{self, ResolveReport},
    game::{AssetRegistry, CardData, GameData},
    index::CardIndex,
    paths::ArtPaths,
};

pub const GUID: &str = "this.looks.different";
pub const NAME: &str = "Art Swap";
pub const VERSION: &str = "1.0.0";

/// Something the game calls once its data has been loaded.
pub trait Initializable {
    fn initialize(&mut self);
}

pub struct ArtSwap<G, A> {
    paths: ArtPaths,
    game: G,
    assets: A,
}

impl<G, A> ArtSwap<G, A>
where
    G: GameData,
    A: AssetRegistry<<G::Card as CardData>::ArtRef>,
{
    /// Sets the mod up when the game loads it. Art is looked for in the "assets" directory beside
    /// the mod.
    pub fn awake(game: G, assets: A) -> Result<ArtSwap<G, A>> {
        let paths = ArtPaths::resolve()?;
        Ok(ArtSwap::with_paths(paths, game, assets))
    }

    /// Sets the mod up to use `paths` rather than finding its own location.
    pub fn with_paths(paths: ArtPaths, game: G, assets: A) -> ArtSwap<G, A> {
        log::info!(
            "{} {} ({}) will load art from {:?}",
            NAME,
            VERSION,
            GUID,
            paths.art_dir()
        );

        ArtSwap {
            paths,
            game,
            assets,
        }
    }

    pub fn paths(&self) -> &ArtPaths {
        &self.paths
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// Indexes the game's cards and swaps in art for every card that has a matching file.
    ///
    /// Errors are returned only for problems that make the whole pass pointless. Problems with
    /// individual files are logged and collected in the report.
    pub fn try_initialize(&mut self) -> Result<ResolveReport> {
        let cards = self
            .game
            .card_datas()
            .wrap_err("Unable to get card data from the game")?;

        let index = CardIndex::build(&*cards).wrap_err("Unable to index card data")?;

        log::info!(
            "Indexed {} cards ({} names)",
            index.card_count(),
            index.len()
        );

        let files = art::list_art_files(self.paths.art_dir())?;
        let report = art::apply_art(&self.paths, &files, &index, cards, &mut self.assets);

        log::info!("{}", report.summary());

        Ok(report)
    }
}

impl<G, A> Initializable for ArtSwap<G, A>
where
    G: GameData,
    A: AssetRegistry<<G::Card as CardData>::ArtRef>,
{
    fn initialize(&mut self) {
        if let Err(err) = self.try_initialize() {
            log::error!("{} could not swap any card art: {:?}", NAME, err);
        }
    }
}
