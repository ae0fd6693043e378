use crate::domain::models::BuildManifest;
use crate::services::storage::Layout;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Parse a build manifest from an explicit path. Hard error when the file
/// is absent or malformed.
pub fn load_manifest(path: &Path) -> anyhow::Result<BuildManifest> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("'{}' not found.", path.display()))?;
    let manifest: BuildManifest = serde_json::from_str(&raw)
        .with_context(|| format!("invalid build manifest '{}'", path.display()))?;
    Ok(manifest)
}

/// Staged manifest at the fixed location, or the placeholder when a build
/// has not been prepared yet.
pub fn load_root_manifest(layout: &Layout) -> anyhow::Result<BuildManifest> {
    let path = layout.manifest_path();
    if !path.exists() {
        return Ok(BuildManifest::placeholder());
    }
    load_manifest(&path)
}
