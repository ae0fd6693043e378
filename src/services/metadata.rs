use crate::domain::models::{DistMetadata, ExtrasRequire};
use crate::services::manifest::load_root_manifest;
use crate::services::storage::Layout;
use crate::services::version::read_version;
use std::fs;
use std::path::Path;

/// Pinned runtime dependencies declared by the distribution descriptor.
const INSTALL_REQUIRES: &[&str] = &[
    "numpy==1.13.0",
    "scipy==0.19.0",
    "pandas==0.20.2",
    "matplotlib==2.0.2",
    "seaborn==0.7.1",
    "bokeh==0.12.5",
    "statsmodels==0.8.0",
    "SQLAlchemy==1.1.10",
    "pyaml==16.12.2",
    "voluptuous==0.10.5",
    "plumbum==1.6.3",
];

const DEV_REQUIRES: &[&str] = &[
    "ipdb==0.10.2",
    "ipython==5.3.0",
    "jupyter==1.0.0",
    "plumbum==1.6.3",
];

/// Globs bundled as package data relative to the root module.
const PACKAGE_DATA: &[&str] = &[
    "build.json",
    "version.txt",
    "config/*",
    "resources/*",
    "_store/*",
    "_store/**/*",
];

/// Assemble the distribution descriptor from the staged manifest and
/// version file, falling back to placeholders when a build has not been
/// prepared. No side effects.
pub fn build_metadata(layout: &Layout) -> anyhow::Result<DistMetadata> {
    let manifest = load_root_manifest(layout)?;
    let version = read_version(layout)?;
    Ok(DistMetadata {
        name: manifest.package_name,
        version,
        packages: find_packages(layout),
        install_requires: INSTALL_REQUIRES.iter().map(|s| s.to_string()).collect(),
        extras_require: ExtrasRequire {
            dev: DEV_REQUIRES.iter().map(|s| s.to_string()).collect(),
        },
        package_data: PACKAGE_DATA.iter().map(|s| s.to_string()).collect(),
    })
}

/// Dotted names of every directory under the root module that carries an
/// initializer file, the root itself included. Sorted for stable output.
pub fn find_packages(layout: &Layout) -> Vec<String> {
    let root_name = layout
        .root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let mut out = Vec::new();
    collect_packages(&layout.root, &root_name, &mut out);
    out.sort();
    out
}

fn collect_packages(dir: &Path, dotted: &str, out: &mut Vec<String>) {
    if !dir.join("__init__.py").is_file() {
        return;
    }
    out.push(dotted.to_string());
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    for entry in entries.flatten() {
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            let name = entry.file_name().to_string_lossy().to_string();
            collect_packages(&entry.path(), &format!("{}.{}", dotted, name), out);
        }
    }
}
