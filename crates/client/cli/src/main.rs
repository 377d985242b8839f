//! Terminal client entry point.
mod args;
mod render;

use anyhow::{Context, Result};
use arena_core::{GameError, RunError};
use arena_runtime::{
    ArenaSession, FileRankingRepository, RankingRepository, RuntimeConfig, RuntimeError, Topic,
};
use args::{Cli, Command, PlayArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.runtime_config(RuntimeConfig::from_env());

    match cli.command {
        None => play(config, PlayArgs::default()).await,
        Some(Command::Play(args)) => play(config, args).await,
        Some(Command::Roster) => {
            let session = ArenaSession::new(ArenaSession::load_setup(&config)?, config)?;
            render::gallery(&session.run().roster_profiles());
            Ok(())
        }
        Some(Command::Market) => {
            let mut session = ArenaSession::new(ArenaSession::load_setup(&config)?, config)?;
            render::market(&session.open_market()?);
            Ok(())
        }
        Some(Command::Ranking { top }) => {
            let repository = open_ranking(&config)?;
            render::ranking(&repository.top(top)?);
            Ok(())
        }
    }
}

async fn play(config: RuntimeConfig, args: PlayArgs) -> Result<()> {
    let mut setup = ArenaSession::load_setup(&config)?;
    if let Some(name) = &args.name {
        setup.player = setup.player.renamed(name.trim());
    }
    let ranking = (!args.no_save).then(|| open_ranking(&config)).transpose()?;
    let mut session = ArenaSession::new(setup, config)?;

    render::gallery(&session.run().roster_profiles());
    println!();

    let visit = session.open_market()?;
    render::market(&visit);
    for name in &args.buy {
        match session.toggle_item(&visit, name) {
            Ok(transaction) => println!("{}", transaction.message()),
            Err(RuntimeError::Run(RunError::Transaction(error)))
                if error.severity().is_recoverable() =>
            {
                println!("{error}");
            }
            Err(error) => return Err(error).with_context(|| format!("could not buy {name}")),
        }
    }
    println!();
    render::sheet(&session.run().player().sheet());
    println!();

    let narrator = tokio::spawn(render::narrate(
        session.subscribe(Topic::Battle),
        session.subscribe(Topic::Run),
    ));
    let summary = session.play_run().await?;
    narrator.await.context("narrator task failed")?;

    render::summary(&summary);

    if let Some(repository) = ranking {
        session.record_result(&repository)?;
        println!();
        render::ranking(&repository.top(10)?);
    }
    Ok(())
}

fn open_ranking(config: &RuntimeConfig) -> Result<FileRankingRepository> {
    let path = config
        .resolve_ranking_path()
        .context("no leaderboard location; set ARENA_RANKING_PATH or pass --ranking")?;
    FileRankingRepository::new(&path)
        .with_context(|| format!("failed to open leaderboard {}", path.display()))
}
