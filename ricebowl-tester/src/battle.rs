//! One-off battle between two birth dates, printed to the terminal.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDateTime};
use clap::Args as ClapArgs;
use colored::Colorize;
use ricebowl_game::{
    BattleConfig, BattleSession, CalendarDate, Clock, CountFormat, GroupedCount,
    MatchResult, PlayerSlot, RngSource, Standing, SystemClock,
};
use std::io::Write;

const NOW_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, ClapArgs)]
pub struct BattleArgs {
    /// Your birth date (YYYY-MM-DD)
    #[arg(long)]
    pub me: Option<CalendarDate>,

    /// Opponent birth date (YYYY-MM-DD)
    #[arg(long)]
    pub opponent: Option<CalendarDate>,

    /// Your display name (defaults to the configured placeholder)
    #[arg(long, default_value = "")]
    pub me_name: String,

    /// Opponent display name (defaults to the configured placeholder)
    #[arg(long, default_value = "")]
    pub opponent_name: String,

    /// Seed for the comment pick; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Evaluate at this local time instead of now (YYYY-MM-DDTHH:MM:SS)
    #[arg(long, value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,
}

fn parse_now(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw, NOW_FORMAT)
        .map_err(|err| format!("expected {NOW_FORMAT}: {err}"))
}

/// Everything printed for a battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    pub me: String,
    pub opponent: String,
    pub result: MatchResult,
    pub comment: String,
}

pub fn run_battle(args: &BattleArgs) -> Result<BattleReport> {
    let now = args.now.unwrap_or_else(|| SystemClock.now());
    let mut session = BattleSession::new(BattleConfig::load_from_static(), now.year());

    session.set_name(PlayerSlot::Me, args.me_name.clone());
    session.set_name(PlayerSlot::Opponent, args.opponent_name.clone());
    for (slot, date) in [(PlayerSlot::Me, args.me), (PlayerSlot::Opponent, args.opponent)] {
        if let Some(date) = date {
            if !session.set_birth_date(slot, date) {
                let bounds = session.stepper(slot).year_bounds();
                bail!(
                    "{} birth date {date} is outside {}..={}",
                    slot.key(),
                    bounds.start(),
                    bounds.end()
                );
            }
        }
    }

    session.start().context("cannot start the battle")?;
    let result = session
        .result(now)
        .context("battle started without a result")?;
    let seed = args.seed.unwrap_or_else(|| rand::random());
    log::debug!("comment seed {seed}");
    let mut rng = RngSource::from_seed(seed);
    let comment = session.comment(&result, &mut rng, &GroupedCount::korean());

    Ok(BattleReport {
        me: session.shown_name(PlayerSlot::Me).to_string(),
        opponent: session.shown_name(PlayerSlot::Opponent).to_string(),
        result,
        comment,
    })
}

pub fn print_battle(out: &mut dyn Write, report: &BattleReport) -> Result<()> {
    let fmt = GroupedCount::korean();
    let result = &report.result;
    writeln!(out, "{}", "🍚 Rice Bowl Battle".bright_cyan().bold())?;
    writeln!(out, "{}", "===================".cyan())?;
    for (slot, name) in [(PlayerSlot::Me, &report.me), (PlayerSlot::Opponent, &report.opponent)] {
        let count = format!("{} 그릇", fmt.format_count(result.bowls(slot)));
        if result.is_winner(slot) {
            writeln!(out, "{name}: {} 🏆", count.green().bold())?;
        } else {
            writeln!(out, "{name}: {count}")?;
        }
    }
    writeln!(
        out,
        "{} 그릇 차이가 나네요!",
        fmt.format_count(result.difference)
    )?;
    let standing = match result.standing {
        Standing::AWins => format!("winner: {}", report.me),
        Standing::BWins => format!("winner: {}", report.opponent),
        Standing::Tie => String::from("tie"),
    };
    writeln!(out, "{}", standing.bold())?;
    writeln!(out, "💬 {}", report.comment)?;
    Ok(())
}
