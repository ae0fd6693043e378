use anyhow::bail;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed on-disk locations of staged build artifacts, all rooted at the
/// package root module directory. Passed into every operation instead of
/// being derived from the process location.
#[derive(Debug, Clone)]
pub struct Layout {
    pub root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("build.json")
    }

    pub fn version_path(&self) -> PathBuf {
        self.root.join("version.txt")
    }

    pub fn store_dir(&self) -> PathBuf {
        self.root.join("_store")
    }

    pub fn model_path(&self, name: &str) -> PathBuf {
        self.store_dir().join(name)
    }
}

/// Ensure the model store exists. Prior contents are kept as-is.
pub fn ensure_store_dir(layout: &Layout) -> anyhow::Result<PathBuf> {
    let store = layout.store_dir();
    fs::create_dir_all(&store)?;
    Ok(store)
}

/// Model names from the manifest with no entry in the store.
pub fn missing_models(layout: &Layout, models: &[String]) -> Vec<PathBuf> {
    models
        .iter()
        .map(|name| layout.model_path(name))
        .filter(|p| !p.exists())
        .collect()
}

/// Copy a file or directory into place, creating destination parents.
///
/// Files overwrite an existing destination; directory trees do not (the
/// store is never cleared, so a second copy over a staged directory fails).
pub fn copy_entry(src: &Path, dst: &Path) -> anyhow::Result<()> {
    if !src.exists() {
        bail!("'{}' not found.", src.display());
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    if src.is_dir() {
        copy_tree(src, dst)?;
    } else {
        fs::copy(src, dst)?;
    }
    Ok(())
}

fn copy_tree(src: &Path, dst: &Path) -> anyhow::Result<()> {
    if dst.exists() {
        bail!("destination '{}' already exists", dst.display());
    }
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let to = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &to)?;
        } else {
            fs::copy(entry.path(), to)?;
        }
    }
    Ok(())
}
