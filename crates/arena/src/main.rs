//! Headless arena driver.
//!
//! Loads the roster and balance tables named by the environment, opens one
//! fight for the configured player and plays it out, letting both sides pick
//! their actions by weight. Each exchange is written to stdout as plain
//! message lines or as one JSON report per line; logs go to stderr.
//!
//! ```bash
//! ARENA_OPPONENT=rock_python ARENA_SEED=7 cargo run -p arena
//! ARENA_OUTPUT=json RUST_LOG=combat=debug cargo run -p arena
//! ```

mod config;
mod logging;

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use rand::seq::IndexedRandom;

use arena_runtime::{CharacterId, ExchangeReport, FightSession, SessionRegistry};
use combat_content::{Roster, RosterLoader, TablesLoader};
use combat_core::CombatTables;

use config::{ArenaConfig, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ArenaConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let roster = RosterLoader::load(&config.roster)
        .with_context(|| format!("loading roster {}", config.roster.display()))?;
    let tables = match &config.tables {
        Some(path) => TablesLoader::load(path)
            .with_context(|| format!("loading tables {}", path.display()))?,
        None => CombatTables::default(),
    };
    let opponent = pick_opponent(&roster, config.opponent.as_deref())?;
    let seed = config.seed.unwrap_or_else(rand::random);

    tracing::info!(
        player = %config.player,
        %opponent,
        seed,
        output = %config.output,
        "Starting arena fight"
    );

    let registry = SessionRegistry::new();
    let character = CharacterId::new(config.player.as_str());
    let session =
        FightSession::from_roster(&roster, &config.player, &opponent, Arc::new(tables), seed)?;
    registry.open(character.clone(), session).await?;

    for _ in 0..config.max_exchanges {
        let report = registry.exchange(&character, None).await?;
        print_report(&report, config.output)?;
        if report.verdict.is_over() {
            break;
        }
    }

    let session = registry.close(&character).await?;
    if !session.is_over() {
        tracing::warn!(
            exchanges = session.exchanges(),
            "Exchange limit reached without a verdict"
        );
    }
    if config.output == OutputFormat::Text {
        println!(
            "{}: {} after {} exchanges (seed {})",
            session.player().name(),
            session.verdict(),
            session.exchanges(),
            session.seed()
        );
    }
    Ok(())
}

fn pick_opponent(roster: &Roster, requested: Option<&str>) -> Result<String> {
    if let Some(id) = requested {
        return Ok(id.to_string());
    }
    let ids: Vec<&str> = roster.opponent_ids().collect();
    ids.choose(&mut rand::rng())
        .map(|id| id.to_string())
        .context("roster has no opponents")
}

fn print_report(report: &ExchangeReport, format: OutputFormat) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Text => {
            for line in &report.messages {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
