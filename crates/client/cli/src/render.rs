//! Plain-text rendering of sessions and leaderboards.
use arena_core::{AdversaryProfile, MarketVisit, PlayerSheet, RunEvent, RunSummary};
use arena_runtime::{Event, RankingEntry};
use console::style;
use tokio::sync::broadcast::{Receiver, error::RecvError};

pub fn gallery(profiles: &[AdversaryProfile]) {
    println!("{}", style("Adversaries").bold());
    for (index, profile) in profiles.iter().enumerate() {
        let tag = if profile.is_boss { " [boss]" } else { "" };
        println!(
            "  {}. {}{}  HP {}  ATK {}",
            index + 1,
            profile.name,
            style(tag).red(),
            profile.hit_points,
            profile.attack
        );
    }
}

pub fn market(visit: &MarketVisit) {
    println!("{}", style(visit.banner()).yellow().bold());
    for item in visit.offers() {
        let label = if visit.is_discounted(item) {
            style(item.price_label()).green().to_string()
        } else {
            item.price_label()
        };
        println!(
            "  {:<24} {:<10} +{:<3} {:<9} {}",
            item.name, item.category, item.bonus, item.rarity, label
        );
    }
}

pub fn sheet(sheet: &PlayerSheet) {
    println!("{}", style(&sheet.name).bold());
    println!(
        "  HP {}/{}  ATK {}  DEF {}  Gold {}",
        sheet.hit_points,
        sheet.max_hit_points,
        sheet.total_attack,
        sheet.total_defense,
        sheet.currency
    );
    if !sheet.inventory.is_empty() {
        println!("  Inventory: {}", sheet.inventory.join(", "));
    }
}

pub fn summary(summary: &RunSummary) {
    println!();
    println!("{}", style(summary.rank.title()).bold().cyan());
    println!("  Battle score     {}", summary.record.battle_score);
    println!("  Remaining gold   {}", summary.record.remaining_currency);
    println!("  Total score      {}", summary.record.total_score);
}

pub fn ranking(entries: &[RankingEntry]) {
    println!("{}", style("Hall of Fame").bold());
    if entries.is_empty() {
        println!("  (no gladiators yet)");
    }
    for (position, entry) in entries.iter().enumerate() {
        println!(
            "  {:>2}. {:<20} {:>5}  {:<8} {}",
            position + 1,
            entry.record.gladiator_name,
            entry.record.total_score,
            entry.rank,
            entry.recorded_at.format("%Y-%m-%d")
        );
    }
}

/// Prints battle and run events until the run finishes or the bus closes.
pub async fn narrate(mut battle: Receiver<Event>, mut run: Receiver<Event>) {
    loop {
        let received = tokio::select! {
            biased;
            event = battle.recv() => event,
            event = run.recv() => event,
        };
        match received {
            Ok(event) => {
                for line in event.messages() {
                    println!("{line}");
                }
                if matches!(event, Event::Run(RunEvent::RunFinished { .. })) {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "narration fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}
