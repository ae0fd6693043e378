use crate::cli::{Cli, Commands};
use crate::domain::models::JsonOut;
use crate::services::manifest::load_manifest;
use crate::services::metadata::build_metadata;
use crate::services::output::print_one;
use crate::services::storage::{copy_entry, ensure_store_dir, missing_models, Layout};
use crate::services::verify::missing_inits;
use crate::services::version::{write_version, VersionProbe};
use anyhow::Context;
use std::path::{Path, PathBuf};

pub fn handle_build_commands(
    cli: &Cli,
    layout: &Layout,
    probe: &dyn VersionProbe,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Verify => {
            let violations = missing_inits(&layout.root)?;
            if violations.is_empty() {
                if cli.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&JsonOut {
                            ok: true,
                            data: "verified"
                        })?
                    );
                }
            } else {
                fail_with_paths(cli.json, &violations, |p| {
                    format!("__init__.py missing in {}", p.display())
                })?;
            }
        }
        Commands::PrepareBuild { build_json } => {
            log_copy(cli.json, Path::new(build_json), &layout.manifest_path());
            copy_entry(Path::new(build_json), &layout.manifest_path())?;

            let version = probe.describe()?;
            if !cli.json {
                println!(
                    "Writing version {} to {}",
                    version,
                    layout.version_path().display()
                );
            }
            write_version(layout, &version)?;

            let manifest = load_manifest(&layout.manifest_path())?;
            let missing = missing_models(layout, &manifest.models);
            if missing.is_empty() {
                if cli.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&JsonOut {
                            ok: true,
                            data: serde_json::json!({
                                "package_name": manifest.package_name,
                                "version": version,
                                "models": manifest.models,
                            })
                        })?
                    );
                }
            } else {
                fail_with_paths(cli.json, &missing, |p| {
                    format!("File \"{}\" missing.", p.display())
                })?;
            }
        }
        Commands::CopyModels { build_json } => {
            ensure_store_dir(layout)?;
            let models_folder = PathBuf::from(
                std::env::var("MODELS_FOLDER").context("MODELS_FOLDER not set")?,
            );
            let manifest = load_manifest(Path::new(build_json))?;
            for model_name in &manifest.models {
                let src = models_folder.join(model_name);
                let dst = layout.model_path(model_name);
                log_copy(cli.json, &src, &dst);
                copy_entry(&src, &dst)?;
            }
            print_one(cli.json, manifest.models.len(), |n| {
                format!("copied {} models", n)
            })?;
        }
        Commands::Metadata => {
            let meta = build_metadata(layout)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: meta
                    })?
                );
            } else {
                println!("name: {}", meta.name);
                println!("version: {}", meta.version);
                println!("packages: {}", meta.packages.join(", "));
                println!("install_requires: {}", meta.install_requires.join(", "));
                println!("extras_require[dev]: {}", meta.extras_require.dev.join(", "));
                println!("package_data: {}", meta.package_data.join(", "));
            }
        }
    }

    Ok(())
}

/// Progress line for a staging copy. Suppressed in json mode so stdout
/// stays a single parseable document.
fn log_copy(json: bool, src: &Path, dst: &Path) {
    if !json {
        println!("Copy \"{}\" to \"{}\"", src.display(), dst.display());
    }
}

/// Soft failure: list every offending path in one pass, then exit 1.
fn fail_with_paths(
    json: bool,
    paths: &[PathBuf],
    row: impl Fn(&PathBuf) -> String,
) -> anyhow::Result<()> {
    if json {
        let listed: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: false,
                data: listed
            })?
        );
    } else {
        for p in paths {
            eprintln!("{}", row(p));
        }
    }
    std::process::exit(1);
}
