mod config;
mod render;

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use quarks_execution::{GameRng, RoundEntry, RoundRequest, RoundScheduler, TriggerGuard};
use tracing::{info, Level};

use config::{Args, Config, Settings};
use render::Format;

fn init_tracing(level: &str) -> Result<()> {
    let level = Level::from_str(level).map_err(|_| anyhow!("invalid log level {level:?}"))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let settings = Settings::resolve(&args, cfg);
    init_tracing(&settings.log_level)?;
    let format = Format::from_flag(settings.html);

    let request = RoundRequest {
        player_name: &args.name,
        wager: &args.wager,
        game: settings.game,
    };
    let entry = match RoundEntry::validate(&request) {
        Ok(entry) => entry,
        Err(err) => {
            if settings.json {
                println!("{}", render::validation_json(err));
            } else {
                println!("{}", render::validation_message(err, format));
            }
            bail!("round rejected: {err}");
        }
    };

    let mut rng = match settings.seed {
        Some(seed) => GameRng::from_seed(seed),
        None => GameRng::from_entropy(),
    };
    let guard = TriggerGuard::new();
    let mut scheduler = RoundScheduler::new(settings.reveal_delay);
    info!(
        game = %settings.game,
        rounds = settings.rounds,
        seeded = settings.seed.is_some(),
        "table open"
    );

    for _ in 0..settings.rounds {
        let permit = guard
            .try_acquire()
            .context("previous round is still being revealed")?;
        let throw = entry.throw(&mut rng);
        if !settings.json {
            println!(
                "{}",
                render::wager_accepted(entry.player.name(), entry.wager, format)
            );
            println!("{}", render::dice_line(&throw.dice(), format));
        }

        let revealed = scheduler
            .start_guarded(permit, throw, entry.wager)
            .wait()
            .await?;
        let report = entry.clone().report(revealed.result);
        if settings.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", render::report(&report, format));
        }
    }
    Ok(())
}
