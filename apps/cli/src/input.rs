//! Line-oriented action parsing.

use anyhow::{anyhow, bail, Result};
use dw_runtime::PlayerAction;

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Action(PlayerAction),
    Help,
}

pub const HELP: &str = "\
Commands:
  buy <commodity> <qty>    buy at today's price
  sell <commodity> <qty>   sell at today's price
  pay <amount>             pay back debt
  loan <amount>            borrow (only while debt is under the ceiling)
  move <location>          travel; ends the day
  quit                     end the game now
  help                     show this list";

/// Parse one line of player input. Identifier validation is left to the
/// engine; this only checks shape and numbers.
pub fn parse_line(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let verb = words
        .next()
        .ok_or_else(|| anyhow!("empty command"))?
        .to_ascii_lowercase();
    let rest: Vec<&str> = words.collect();

    let action = match verb.as_str() {
        "help" | "h" | "?" => return Ok(Command::Help),
        "buy" | "b" => {
            let (commodity, qty) = name_and_number(&rest, "buy <commodity> <qty>")?;
            PlayerAction::Buy { commodity, qty }
        }
        "sell" | "s" => {
            let (commodity, qty) = name_and_number(&rest, "sell <commodity> <qty>")?;
            PlayerAction::Sell { commodity, qty }
        }
        "pay" | "p" => PlayerAction::PayDebt {
            amount: single_number(&rest, "pay <amount>")?,
        },
        "loan" | "l" | "borrow" => PlayerAction::TakeLoan {
            amount: single_number(&rest, "loan <amount>")?,
        },
        "move" | "m" | "go" => {
            if rest.is_empty() {
                bail!("usage: move <location>");
            }
            PlayerAction::Move {
                location: rest.join(" "),
            }
        }
        "quit" | "q" | "exit" => {
            if !rest.is_empty() {
                bail!("usage: quit");
            }
            PlayerAction::Quit
        }
        other => bail!("unknown command '{other}' (try 'help')"),
    };
    Ok(Command::Action(action))
}

fn name_and_number(rest: &[&str], usage: &str) -> Result<(String, u64)> {
    match rest.split_last() {
        Some((n, name)) if !name.is_empty() => Ok((name.join(" "), number(n)?)),
        _ => bail!("usage: {usage}"),
    }
}

fn single_number(rest: &[&str], usage: &str) -> Result<u64> {
    match rest {
        [n] => number(n),
        _ => bail!("usage: {usage}"),
    }
}

fn number(s: &str) -> Result<u64> {
    s.trim_start_matches('$')
        .parse::<u64>()
        .map_err(|_| anyhow!("'{s}' is not a non-negative whole number"))
}
