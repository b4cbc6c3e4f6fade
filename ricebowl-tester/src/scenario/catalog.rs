use anyhow::{Context, Result, ensure};
use chrono::Datelike;
use rand::Rng;
use ricebowl_game::bowls::MS_PER_DAY;
use ricebowl_game::{
    BOWLS_PER_DAY, BattleConfig, BattlePhase, BattleSession, ConfigError, DateField, DateStepper,
    GroupedCount, MESSAGE_COUNT, MatchResult, Player, PlayerSlot, RngSource, Standing,
    StepDirection, compute_bowl_count, derive_match, group_thousands, render_template,
    select_message,
};

use super::{Scenario, ScenarioCtx};

pub fn catalog_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "smoke",
            "Battle Smoke Test",
            "Start, compare, comment and reset a full two-player battle",
            smoke,
        ),
        Scenario::new(
            "day-count",
            "Day Count Rounding",
            "Bowl counts are ceil(elapsed days) x 3 and symmetric in time",
            day_count,
        ),
        Scenario::new(
            "stepper",
            "Date Stepper Random Walk",
            "Random steps and typed values never leave a valid calendar date",
            stepper_walk,
        ),
        Scenario::new(
            "messages",
            "Comment Selection",
            "Comments come from the template pool and embed the grouped difference",
            messages,
        ),
        Scenario::new(
            "matchup",
            "Matchup Consistency",
            "Standing, difference and winner flags agree for any pair of players",
            matchup,
        ),
        Scenario::new(
            "config",
            "Battle Config",
            "Bundled configuration validates and rejects broken overrides",
            config,
        ),
    ]
}

pub fn find_scenario(key: &str) -> Option<Scenario> {
    catalog_scenarios()
        .into_iter()
        .find(|scenario| scenario.key == key)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog_scenarios()
        .into_iter()
        .map(|scenario| (scenario.key, scenario.description))
        .collect()
}

/// Replace an `all` entry with every catalog key, keeping other entries in order.
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut keys: Vec<String> = requested.iter().filter(|k| *k != "all").cloned().collect();
    if requested.iter().any(|k| k == "all") {
        for scenario in catalog_scenarios() {
            if !keys.iter().any(|k| k == scenario.key) {
                keys.push(scenario.key.to_string());
            }
        }
    }
    keys
}

fn smoke(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut session = BattleSession::new(BattleConfig::load_from_static(), ctx.now.year());
    ensure!(
        session.start().is_err(),
        "battle started without birth dates"
    );
    ensure!(session.phase() == BattlePhase::Input, "failed start changed phase");

    let me = ctx.random_birth_date();
    let opponent = ctx.random_birth_date();
    ensure!(session.set_birth_date(PlayerSlot::Me, me), "rejected {me}");
    ensure!(
        session.set_birth_date(PlayerSlot::Opponent, opponent),
        "rejected {opponent}"
    );
    session.set_name(PlayerSlot::Opponent, "상대");
    session.start()?;

    let result = session
        .result(ctx.now)
        .context("no result with both dates set")?;
    let mut source = RngSource::new(ctx.rng.clone());
    let comment = session.comment(&result, &mut source, &GroupedCount::korean());
    ensure!(
        comment.contains(&group_thousands(result.difference)),
        "comment {comment:?} lacks difference {}",
        result.difference
    );

    session.reset();
    ensure!(session.phase() == BattlePhase::Input, "reset kept started phase");
    ensure!(
        session.player(PlayerSlot::Me).birth_date == Some(me),
        "reset cleared birth date"
    );
    ensure!(
        session.shown_name(PlayerSlot::Opponent) == "상대",
        "reset cleared name"
    );
    Ok(())
}

fn day_count(ctx: &mut ScenarioCtx) -> Result<()> {
    for _ in 0..50 {
        let birth = ctx.random_birth_instant();
        let bowls = compute_bowl_count(birth, ctx.now);
        let elapsed_ms = (ctx.now - birth).num_milliseconds().unsigned_abs();
        let expected = elapsed_ms.div_ceil(MS_PER_DAY) * BOWLS_PER_DAY;
        ensure!(
            bowls == expected,
            "birth {birth} now {}: {bowls} bowls, expected {expected}",
            ctx.now
        );
        ensure!(bowls % BOWLS_PER_DAY == 0, "{bowls} is not a multiple of 3");
        ensure!(
            compute_bowl_count(ctx.now, birth) == bowls,
            "count is not symmetric for {birth}"
        );
    }
    Ok(())
}

fn stepper_walk(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut stepper = DateStepper::new(ctx.now.year());
    for _ in 0..200 {
        let field = DateField::ALL[ctx.rng.gen_range(0..DateField::ALL.len())];
        match ctx.rng.gen_range(0..4) {
            0 => stepper.step(field, StepDirection::Increment),
            1 => stepper.step(field, StepDirection::Decrement),
            2 => {
                let typed = ctx.rng.gen_range(-5..3_000).to_string();
                stepper.set_direct(field, &typed)
            }
            _ => stepper.set_direct(field, "abc"),
        };
        ensure!(
            stepper.value().is_some(),
            "stepper left the calendar at {}-{}-{}",
            stepper.year(),
            stepper.month(),
            stepper.day()
        );
        ensure!(
            stepper.year_bounds().contains(&stepper.year()),
            "year {} out of bounds",
            stepper.year()
        );
    }

    let frozen = stepper.value();
    stepper.set_enabled(false);
    for field in DateField::ALL {
        stepper.step(field, StepDirection::Increment);
        stepper.set_direct(field, "1");
        ensure!(!stepper.enter_edit_mode(field), "disabled stepper entered edit mode");
    }
    ensure!(stepper.value() == frozen, "disabled stepper changed");
    stepper.set_enabled(true);
    ensure!(stepper.value() == frozen, "re-enabling changed the date");
    Ok(())
}

fn messages(ctx: &mut ScenarioCtx) -> Result<()> {
    let difference = ctx.rng.gen_range(0..10_000_000_u64);
    let pool: Vec<String> = (0..MESSAGE_COUNT)
        .map(|idx| render_template(idx, "W", "L", difference, &GroupedCount::korean()))
        .collect();
    let seed = ctx.rng.r#gen::<u64>();
    let mut first = RngSource::from_seed(seed);
    let mut second = RngSource::from_seed(seed);
    for _ in 0..20 {
        let picked = select_message(&mut first, "W", "L", difference, &GroupedCount::korean());
        ensure!(pool.contains(&picked), "{picked:?} is not a template");
        ensure!(
            picked.contains(&group_thousands(difference)),
            "{picked:?} lacks {difference}"
        );
        let again = select_message(&mut second, "W", "L", difference, &GroupedCount::korean());
        ensure!(picked == again, "same seed produced different comments");
    }
    Ok(())
}

fn matchup(ctx: &mut ScenarioCtx) -> Result<()> {
    let a = Player::new("", Some(ctx.random_birth_date()));
    let b = Player::new("", Some(ctx.random_birth_date()));
    let ab = derive_match(&a, &b, ctx.now, BOWLS_PER_DAY).context("missing result")?;
    let ba = derive_match(&b, &a, ctx.now, BOWLS_PER_DAY).context("missing result")?;
    ensure!(ab.bowls_a == ba.bowls_b && ab.bowls_b == ba.bowls_a, "swap mismatch");
    ensure!(
        ab.difference == ab.bowls_a.abs_diff(ab.bowls_b),
        "difference mismatch"
    );

    let x = ctx.rng.gen_range(0..1_000_000_u64) * BOWLS_PER_DAY;
    let y = ctx.rng.gen_range(0..1_000_000_u64) * BOWLS_PER_DAY;
    let result = MatchResult::from_counts(x, y);
    let expected = match x.cmp(&y) {
        std::cmp::Ordering::Greater => Standing::AWins,
        std::cmp::Ordering::Less => Standing::BWins,
        std::cmp::Ordering::Equal => Standing::Tie,
    };
    ensure!(result.standing == expected, "{x} vs {y} gave {:?}", result.standing);
    ensure!(
        !(result.is_winner(PlayerSlot::Me) && result.is_winner(PlayerSlot::Opponent)),
        "both players flagged as winner"
    );
    Ok(())
}

fn config(_ctx: &mut ScenarioCtx) -> Result<()> {
    let cfg = BattleConfig::load_from_static();
    cfg.validate()?;
    let json = serde_json::to_string(&cfg)?;
    ensure!(BattleConfig::from_json(&json)? == cfg, "config JSON round trip drifted");
    ensure!(
        BattleConfig::from_json(r#"{"bowls_per_day":0}"#) == Err(ConfigError::ZeroRate(0)),
        "zero rate accepted"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_passes_for_a_few_seeds() {
        for scenario in catalog_scenarios() {
            for seed in [0, 1, 1337, u64::MAX] {
                if let Err(err) = scenario.run(seed) {
                    panic!("{} failed for seed {seed}: {err:#}", scenario.key);
                }
            }
        }
    }

    #[test]
    fn expand_all_appends_missing_keys_once() {
        let expanded = expand_scenarios(&["stepper".to_string(), "all".to_string()]);
        assert_eq!(expanded[0], "stepper");
        assert_eq!(expanded.len(), catalog_scenarios().len());
        assert!(expanded.contains(&"config".to_string()));
    }

    #[test]
    fn find_and_list_agree() {
        for (key, _) in list_scenarios() {
            assert!(find_scenario(key).is_some());
        }
        assert!(find_scenario("nope").is_none());
    }
}
