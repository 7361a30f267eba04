//! Where the mod keeps its files.
//!
//! ```text
//!     <install dir>     The directory containing the mod library.
//!       ArtSwap.log     This run's log.
//!       assets          Replacement card art. Subfolders are searched too.
//!         Deadweight.jpg
//! ```
//!
//! Art files are named after the English name of the card they replace. Only lowercase
//! extensions are recognised.

use std::path::{Path, PathBuf};

use eyre::{format_err, Context, Result};

/// Name of the directory (beside the mod) that holds the replacement art.
pub const ART_DIR_NAME: &str = "assets";

/// Extensions that art files may have. Matching is case-sensitive, so "x.PNG" is ignored.
pub const ART_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub const LOG_FILE_NAME: &str = "ArtSwap.log";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtPaths {
    install_dir: PathBuf,
}

impl ArtPaths {
    /// Uses `install_dir` as the directory the mod is installed in.
    pub fn new(install_dir: impl Into<PathBuf>) -> ArtPaths {
        ArtPaths {
            install_dir: install_dir.into(),
        }
    }

    /// Finds the directory containing the running module.
    pub fn resolve() -> Result<ArtPaths> {
        let exe = std::env::current_exe().wrap_err("Unable to find the mod's location")?;

        let install_dir = exe
            .parent()
            .ok_or_else(|| format_err!("Module path {:?} has no parent directory", exe))?;

        Ok(ArtPaths::new(install_dir))
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// The full path to the art directory.
    pub fn art_dir(&self) -> PathBuf {
        self.install_dir.join(ART_DIR_NAME)
    }

    pub fn log_path(&self) -> PathBuf {
        self.install_dir.join(LOG_FILE_NAME)
    }

    /// Returns `path` relative to the install directory with '/' separators, e.g.
    /// "assets/Deadweight.jpg". This is the form the game expects for mod asset paths.
    pub fn relative_path(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();

        let relative = path.strip_prefix(&self.install_dir).wrap_err_with(|| {
            format_err!(
                "{:?} is not inside the install directory {:?}",
                path,
                self.install_dir
            )
        })?;

        let parts = relative
            .components()
            .map(|component| {
                component
                    .as_os_str()
                    .to_str()
                    .ok_or_else(|| format_err!("{:?} isn't valid UTF-8", path))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths() {
        let paths = ArtPaths::new("/mods/artswap");

        assert_eq!(paths.art_dir(), PathBuf::from("/mods/artswap/assets"));
        assert_eq!(paths.log_path(), PathBuf::from("/mods/artswap/ArtSwap.log"));
    }

    #[test]
    fn relative_paths_use_forward_slashes() {
        let paths = ArtPaths::new("/mods/artswap");

        assert_eq!(
            paths
                .relative_path("/mods/artswap/assets/Deadweight.jpg")
                .unwrap(),
            "assets/Deadweight.jpg"
        );

        assert_eq!(
            paths
                .relative_path("/mods/artswap/assets/spells/Blazing Bolts.png")
                .unwrap(),
            "assets/spells/Blazing Bolts.png"
        );
    }

    #[test]
    fn paths_outside_install_dir_are_rejected() {
        let paths = ArtPaths::new("/mods/artswap");
        let err = paths.relative_path("/elsewhere/Deadweight.jpg").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("\"/elsewhere/Deadweight.jpg\" is not inside"));
    }

    #[test]
    fn resolve_uses_a_real_directory() {
        let paths = ArtPaths::resolve().unwrap();
        assert!(paths.install_dir().is_dir());
    }
}
