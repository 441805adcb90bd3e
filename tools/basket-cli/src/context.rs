//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use basket_cache::{Cache, FileStore};
use basket_commerce::store::CartStore;
use tracing::debug;

use crate::config::CliConfig;
use crate::output::{ConsoleNotifier, Output};

/// Config file names, checked in order in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["basket.toml", ".basket.toml", "basket.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, Path::new(path));
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd)? {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config: config.with_env_overrides(),
            config_path,
            output,
            cwd,
        })
    }

    /// Directory backing the persisted cart.
    pub fn storage_dir(&self) -> PathBuf {
        resolve(&self.cwd, &self.config.storage.dir)
    }

    /// Open the cart store over the file-backed cache.
    pub fn open_store(&self) -> Result<CartStore> {
        let dir = self.storage_dir();
        debug!(dir = %dir.display(), "opening cart storage");
        self.output.debug(&format!("Using storage at {}", dir.display()));

        let backend = FileStore::open(dir.clone())
            .with_context(|| format!("Failed to open storage at {}", dir.display()))?;
        let notifier = Arc::new(ConsoleNotifier::new(self.output.clone()));

        CartStore::from_config(&self.config.store, Cache::new(backend), notifier)
            .context("Failed to open cart store")
    }
}

/// Find a config file in `start` or one of its parents.
///
/// A file that exists but fails to parse is an error rather than skipped.
pub fn find_config(start: &Path) -> Result<Option<(PathBuf, CliConfig)>> {
    for dir in start.ancestors() {
        for name in CONFIG_NAMES {
            let path = dir.join(name);
            if path.is_file() {
                let config = CliConfig::load(&path)?;
                return Ok(Some((path, config)));
            }
        }
    }
    Ok(None)
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            root.path().join("basket.toml"),
            "[store]\nstorage_namespace = \"@Up\"\n",
        )
        .unwrap();

        let (path, config) = find_config(&nested).unwrap().unwrap();

        assert_eq!(path, root.path().join("basket.toml"));
        assert_eq!(config.store.storage_namespace, "@Up");
    }

    #[test]
    fn test_find_config_prefers_closest() {
        let root = tempfile::tempdir().unwrap();
        let child = root.path().join("child");
        std::fs::create_dir_all(&child).unwrap();
        std::fs::write(root.path().join("basket.toml"), "").unwrap();
        std::fs::write(child.join(".basket.toml"), "").unwrap();

        let (path, _) = find_config(&child).unwrap().unwrap();
        assert_eq!(path, child.join(".basket.toml"));
    }

    #[test]
    fn test_find_config_rejects_broken_file() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("basket.json"), "{ nope").unwrap();

        assert!(find_config(root.path()).is_err());
    }

    #[test]
    fn test_resolve() {
        let cwd = Path::new("/work");
        assert_eq!(resolve(cwd, Path::new(".basket")), PathBuf::from("/work/.basket"));
        assert_eq!(resolve(cwd, Path::new("/var/cart")), PathBuf::from("/var/cart"));
    }
}
