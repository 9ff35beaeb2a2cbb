use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::domain::{Pairing, StandingEntry};

pub fn print_standings(standings: &[StandingEntry], json: bool) -> Result<()> {
    if json {
        return print_json(standings);
    }

    println!("{}", format!("{:>4}  {:<24} {:>5} {:>8}", "#", "Name", "Wins", "Matches").bold());
    for (rank, entry) in standings.iter().enumerate() {
        println!(
            "{:>4}  {:<24} {:>5} {:>8}",
            rank + 1,
            format!("{} ({})", entry.name, entry.id),
            entry.wins,
            entry.matches_played
        );
    }
    Ok(())
}

pub fn print_pairings(pairings: &[Pairing], json: bool) -> Result<()> {
    if json {
        return print_json(pairings);
    }

    println!("{}", format!("{:>4}  {:<24} {:<24}", "Pair", "Player A", "Player B").bold());
    for (idx, pairing) in pairings.iter().enumerate() {
        println!(
            "{:>4}  {:<24} {:<24}",
            idx + 1,
            format!("{} ({})", pairing.first_name, pairing.first_id),
            format!("{} ({})", pairing.second_name, pairing.second_id)
        );
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
