//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `storage.rs` — package layout paths + file/directory copy rules.
//! - `manifest.rs` — build manifest loading with placeholder fallback.
//! - `verify.rs` — initializer-file walk over the package tree.
//! - `version.rs` — version probe (git describe) + version file persistence.
//! - `metadata.rs` — distribution descriptor assembly.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod manifest;
pub mod metadata;
pub mod output;
pub mod storage;
pub mod verify;
pub mod version;
