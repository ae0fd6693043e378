use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::handle_build_commands;
use services::storage::Layout;
use services::version::GitDescribe;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        if cli.json {
            let body = serde_json::json!({
                "ok": false,
                "error": { "message": format!("{:#}", err) }
            });
            println!("{}", body);
        } else {
            eprintln!("error: {:#}", err);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let layout = Layout::new(&cli.root);
    let probe = GitDescribe {
        dir: std::env::current_dir()?,
    };
    handle_build_commands(cli, &layout, &probe)
}
