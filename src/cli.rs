use clap::{Parser, Subcommand};

pub const DEFAULT_ROOT_MODULE: &str = "n4s";

#[derive(Parser, Debug)]
#[command(name = "prepack", version, about = "Package build orchestrator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_ROOT_MODULE,
        help = "Package root module directory"
    )]
    pub root: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that every package directory carries an initializer file
    Verify,
    /// Stage the build manifest and version file, then check the model store
    PrepareBuild {
        #[arg(long = "build-json", short = 'b', help = "Path to the build manifest")]
        build_json: String,
    },
    /// Populate the model store from the MODELS_FOLDER directory
    CopyModels {
        #[arg(long = "build-json", short = 'b', help = "Path to the build manifest")]
        build_json: String,
    },
    /// Print the distribution descriptor assembled from staged metadata
    Metadata,
}
