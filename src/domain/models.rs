use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_PACKAGE_NAME: &str = "unnamed-package";

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Build manifest naming the package and the model artifacts it bundles.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BuildManifest {
    pub package_name: String,
    #[serde(default)]
    pub models: Vec<String>,
}

impl BuildManifest {
    /// Fallback used when the staged manifest has not been copied yet.
    pub fn placeholder() -> Self {
        Self {
            package_name: PLACEHOLDER_PACKAGE_NAME.to_string(),
            models: Vec::new(),
        }
    }
}

/// Distribution descriptor consumed by the packaging pipeline.
#[derive(Debug, Serialize)]
pub struct DistMetadata {
    pub name: String,
    pub version: String,
    pub packages: Vec<String>,
    pub install_requires: Vec<String>,
    pub extras_require: ExtrasRequire,
    pub package_data: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtrasRequire {
    pub dev: Vec<String>,
}
