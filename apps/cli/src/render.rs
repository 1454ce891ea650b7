//! Plain-text rendering of snapshots and outcomes.

use dw_runtime::{GameSnapshot, Outcome};
use std::fmt::Write;

pub fn snapshot(s: &GameSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Day {}/{} ({} remaining) | {}",
        s.day.min(s.total_days),
        s.total_days,
        s.days_remaining,
        s.location
    );
    let _ = writeln!(out, "Cash: ${} | Debt: ${}", s.cash, s.debt);
    let held: Vec<String> = s
        .inventory
        .iter()
        .map(|h| format!("{}: {}", h.commodity, h.quantity))
        .collect();
    let _ = writeln!(out, "Inventory: {}", held.join(" | "));
    let _ = writeln!(out, "\nMarket:");
    for l in &s.market {
        let _ = writeln!(
            out,
            "  {:<12} ${:>6}   qty {:>4}",
            l.commodity.0, l.unit_price, l.available_quantity
        );
    }
    let places: Vec<&str> = s.locations.iter().map(|l| l.0.as_str()).collect();
    let _ = writeln!(out, "\nTravel: {}", places.join(", "));
    out
}

pub fn outcome(o: &Outcome) -> String {
    match o {
        Outcome::Won { score } => format!("Debt-free! Final score: ${score}"),
        Outcome::Lost { final_debt } => {
            format!("Game over. You still owe ${final_debt}. You lose.")
        }
    }
}
