//! Finds replacement art files and swaps them in for the art on the cards they're named after.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use eyre::{format_err, Context, Result};
use itertools::Itertools;

use crate::{
    game::{AssetLoadingInfo, AssetRegistry, AssetType, CardData},
    index::{name_key, CardIndex},
    paths::{ArtPaths, ART_EXTENSIONS},
};

/// An image file in the art directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtFile {
    path: PathBuf,
}

impl ArtFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file name with its extension, for messages.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Returns the key used to find the cards this file replaces: the file name without its
    /// extension, in lowercase.
    pub fn key(&self) -> Result<String> {
        let stem = self
            .path
            .file_stem()
            .ok_or_else(|| format_err!("{:?} has no file name", self.path))?
            .to_str()
            .ok_or_else(|| format_err!("{:?} isn't valid UTF-8", self.path))?;

        Ok(name_key(stem))
    }
}

/// Adds every file under `dir` to `found`, searching subdirectories. Linked files are included,
/// but linked directories are skipped.
fn collect_files(dir: &Path, found: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in dir.read_dir()? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Error while reading art from {:?}: {}", dir, err);
                continue;
            }
        };

        let path = entry.path();

        // Linked directories are not followed. One that points back up the tree would have us
        //  list the same art over and over.
        let is_link = entry
            .file_type()
            .map(|file_type| file_type.is_symlink())
            .unwrap_or(false);

        if is_link && path.is_dir() {
            log::warn!("Not searching linked directory {:?} for art", path);
        } else if path.is_dir() {
            if let Err(err) = collect_files(&path, found) {
                log::warn!("Unable to search {:?} for art: {}", path, err);
            }
        } else if path.is_file() {
            found.push(path);
        }
    }

    Ok(())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(OsStr::to_str) == Some(extension)
}

/// Lists the image files in `art_dir` and its subdirectories.
///
/// Files are grouped by extension in the order of `ART_EXTENSIONS`, and sorted by path within
/// each group. Extensions must match exactly, so "Blazing.PNG" is not an image file as far as
/// we're concerned.
pub fn list_art_files(art_dir: impl AsRef<Path>) -> Result<Vec<ArtFile>> {
    let art_dir = art_dir.as_ref();

    eyre::ensure!(
        art_dir.is_dir(),
        "Art directory {:?} does not exist. Create it beside the mod and put your card art in it.",
        art_dir
    );

    let mut found = vec![];
    collect_files(art_dir, &mut found)
        .wrap_err_with(|| format_err!("Unable to read art directory {:?}", art_dir))?;

    let files = ART_EXTENSIONS
        .iter()
        .flat_map(|extension| {
            found
                .iter()
                .filter(move |path| has_extension(path, extension))
                .sorted()
        })
        .map(|path| ArtFile { path: path.clone() })
        .collect_vec();

    log::info!(
        "There {} {} image file{} in {:?}",
        if files.len() == 1 { "is" } else { "are" },
        files.len(),
        if files.len() == 1 { "" } else { "s" },
        art_dir
    );

    Ok(files)
}

/// Makes `card` use the image at `art_path` as its art. `art_path` is relative to `plugin_path`,
/// e.g. "assets/Deadweight.jpg".
pub fn replace_card_art<C, A>(
    card: &mut C,
    art_path: &str,
    plugin_path: &Path,
    assets: &mut A,
) -> Result<()>
where
    C: CardData,
    A: AssetRegistry<C::ArtRef>,
{
    eyre::ensure!(!art_path.is_empty(), "No art path given");

    let info = AssetLoadingInfo {
        file_path: art_path.to_string(),
        plugin_path: plugin_path.to_path_buf(),
        asset_type: AssetType::CardArt,
    };

    let art_ref = assets
        .build_and_register(&info)
        .wrap_err_with(|| format_err!("Unable to register '{}'", art_path))?;

    card.set_art_ref(art_ref);

    Ok(())
}

/// What happened during a pass over the art files.
#[derive(Debug, Default)]
pub struct ResolveReport {
    pub files_seen: usize,

    /// Files whose name matched at least one card.
    pub files_matched: usize,

    pub cards_updated: usize,

    /// Names of files that didn't match any card.
    pub unmatched: Vec<String>,

    /// Files that couldn't be used and cards that couldn't be updated.
    pub failures: Vec<eyre::Report>,
}

impl ResolveReport {
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} art file(s) found, {} used, {} card(s) updated",
            self.files_seen, self.files_matched, self.cards_updated
        );

        if !self.unmatched.is_empty() {
            summary += &format!("; unused: {}", self.unmatched.iter().join(", "));
        }

        if !self.failures.is_empty() {
            summary += &format!("; {} failure(s)", self.failures.len());
        }

        summary
    }
}

/// Uses the art in `files` for every card in `cards` that it's named after.
///
/// Nothing in here stops the pass: files that don't match a card are skipped with a warning, and
/// cards that can't be updated are logged and left as they are. Cards that were updated before a
/// failure keep their new art.
pub fn apply_art<C, A>(
    paths: &ArtPaths,
    files: &[ArtFile],
    index: &CardIndex,
    cards: &mut [C],
    assets: &mut A,
) -> ResolveReport
where
    C: CardData,
    A: AssetRegistry<C::ArtRef>,
{
    let mut report = ResolveReport {
        files_seen: files.len(),
        ..Default::default()
    };

    for file in files {
        let file_name = file.file_name();
        log::debug!("Processing art file '{}'", file_name);

        let key = match file.key() {
            Ok(key) => key,
            Err(err) => {
                log::warn!("Could not use '{}': {:?}", file_name, err);
                report.failures.push(err);
                continue;
            }
        };

        // Most art files won't match anything if the player has art for cards from content they
        //  don't have, so this isn't an error.
        let positions = match index.get(&key) {
            Some(positions) => positions,
            None => {
                log::warn!(
                    "Could not use '{}': there is no card named '{}'",
                    file_name,
                    key
                );

                report.unmatched.push(file_name);
                continue;
            }
        };

        let art_path = match paths.relative_path(file.path()) {
            Ok(art_path) => art_path,
            Err(err) => {
                log::error!("Could not use '{}': {:?}", file_name, err);
                report.failures.push(err);
                continue;
            }
        };

        report.files_matched += 1;

        // Usually there's one card per file, but some names (like Blazing Bolts) have more.
        for &position in positions {
            let result = match cards.get_mut(position) {
                Some(card) => replace_card_art(card, &art_path, paths.install_dir(), assets),
                None => Err(format_err!(
                    "No card at position {} (there are {})",
                    position,
                    cards.len()
                )),
            };

            match result {
                Ok(()) => {
                    log::info!("Replaced art for '{}' with '{}'", key, art_path);
                    report.cards_updated += 1;
                }

                Err(err) => {
                    let err = err.wrap_err(format!("While using '{}'", file_name));
                    log::error!("{:?}", err);
                    report.failures.push(err);
                }
            }
        }
    }

    report
}
