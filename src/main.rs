//! ClipStash CLI entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use clip_stash::cli::{
    app::{load_merged_config, root_override, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, DropInput},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
    run_classify, run_drop, run_save, run_watch, RunContext,
};
use clip_stash::domain::config::AppConfig;
use clip_stash::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    let cli_config = cli.to_config();
    let root = root_override(cli.root.clone());

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Classify => run_classify().await,
        Commands::Save { selection, json } => {
            let ctx = context(cli_config, root).await;
            run_save(&ctx, selection, json).await
        }
        Commands::Drop {
            paths,
            text,
            image,
            json,
        } => {
            let Some(input) = DropInput::from_args(paths, text, image) else {
                presenter.error("Nothing to drop. Pass paths, --text or --image");
                return ExitCode::from(EXIT_USAGE_ERROR);
            };
            let ctx = context(cli_config, root).await;
            run_drop(&ctx, input, json).await
        }
        Commands::Watch { interval, force } => {
            let ctx = context(cli_config, root).await;
            run_watch(&ctx, interval, force).await
        }
    }
}

async fn context(cli_config: AppConfig, root_override: Option<PathBuf>) -> RunContext {
    RunContext {
        config: load_merged_config(cli_config).await,
        root_override,
    }
}
