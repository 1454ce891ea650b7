#![deny(warnings)]

//! Terminal front end: reads one action per line from stdin and prints the
//! game state after each one.

mod input;
mod render;

use anyhow::{Context, Result};
use dw_core::{validate_config, GameConfig};
use dw_runtime::{Game, PlayerAction};
use input::Command;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    scenario: Option<PathBuf>,
    seed: Option<u64>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from<I: IntoIterator<Item = String>>(argv: I) -> Result<Args> {
    let mut args = Args::default();
    let mut it = argv.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--scenario" => {
                let path = it.next().context("--scenario needs a path")?;
                args.scenario = Some(PathBuf::from(path));
            }
            "--seed" => {
                let s = it.next().context("--seed needs a value")?;
                args.seed = Some(s.parse().with_context(|| format!("bad seed '{s}'"))?);
            }
            "--json" => args.json = true,
            other => anyhow::bail!("unknown argument '{other}'"),
        }
    }
    Ok(args)
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut cfg = match &args.scenario {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.rng_seed = seed;
    }
    validate_config(&cfg)?;
    Ok(cfg)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = parse_args()?;
    let cfg = load_config(&args)?;
    info!(scenario = ?args.scenario, seed = cfg.rng_seed, "starting game");

    let mut game = Game::new(cfg)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut lines = stdin.lock().lines();

    if !args.json {
        writeln!(
            stdout,
            "Welcome to Dope Wars! You have {} days to make as much money as possible.\n",
            game.config().total_days
        )?;
    }
    show(&mut stdout, &game, args.json)?;

    while !game.is_over() {
        if !args.json {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }
        let action = match lines.next().transpose()? {
            None => PlayerAction::Quit,
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => match input::parse_line(&line) {
                Ok(Command::Action(a)) => a,
                Ok(Command::Help) => {
                    writeln!(stdout, "{}", input::HELP)?;
                    continue;
                }
                Err(e) => {
                    writeln!(stdout, "{e}")?;
                    continue;
                }
            },
        };
        match game.apply(action) {
            Ok(_) => show(&mut stdout, &game, args.json)?,
            Err(e) if args.json => {
                writeln!(stdout, "{}", serde_json::json!({ "error": e.to_string() }))?
            }
            Err(e) => writeln!(stdout, "Can't do that: {e}")?,
        }
    }

    if let (Some(outcome), false) = (game.outcome(), args.json) {
        writeln!(stdout, "{}", render::outcome(&outcome))?;
    }
    Ok(())
}

fn show(out: &mut impl Write, game: &Game, json: bool) -> Result<()> {
    let snap = game.snapshot();
    if json {
        writeln!(out, "{}", serde_json::to_string(&snap)?)?;
    } else if !game.is_over() {
        writeln!(out, "{}", render::snapshot(&snap))?;
    }
    Ok(())
}
