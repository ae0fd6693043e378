use crate::services::storage::Layout;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

pub const PLACEHOLDER_VERSION: &str = "0.0.0-unknown-version";

#[derive(thiserror::Error, Debug)]
pub enum VersionError {
    #[error("failed to run version tool: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("version tool exited with {code}: {stderr}")]
    Tool { code: i32, stderr: String },
    #[error("version tool produced no output")]
    Empty,
}

/// Narrow seam over the external version-control lookup so command handlers
/// can be exercised with a stub.
pub trait VersionProbe {
    fn describe(&self) -> Result<String, VersionError>;
}

/// `git describe --tags` in the working tree the CLI was invoked from.
pub struct GitDescribe {
    pub dir: PathBuf,
}

impl VersionProbe for GitDescribe {
    fn describe(&self) -> Result<String, VersionError> {
        let out = Command::new("git")
            .args(["describe", "--tags"])
            .current_dir(&self.dir)
            .output()?;
        if !out.status.success() {
            return Err(VersionError::Tool {
                code: out.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
        if version.is_empty() {
            return Err(VersionError::Empty);
        }
        Ok(version)
    }
}

pub fn write_version(layout: &Layout, version: &str) -> anyhow::Result<()> {
    let path = layout.version_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, version)?;
    Ok(())
}

/// Staged version string, or the placeholder when no build was prepared.
pub fn read_version(layout: &Layout) -> anyhow::Result<String> {
    let path = layout.version_path();
    if !path.exists() {
        return Ok(PLACEHOLDER_VERSION.to_string());
    }
    Ok(fs::read_to_string(path)?.trim().to_string())
}
