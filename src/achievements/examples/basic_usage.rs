//! Basic usage example for the achievements engine

use achievements::{AchievementEngine, Actor, Role, nordics_achievements};
use leveling::LevelCurve;
use std::sync::Arc;
use store::{EntityId, MemoryStore};

fn main() {
    println!("=== Nordics Achievements Demo ===\n");

    let store = Arc::new(MemoryStore::new());
    let engine = AchievementEngine::new(
        nordics_achievements(),
        LevelCurve::player(),
        LevelCurve::town(),
        store.clone(),
        store.clone(),
    )
    .expect("built-in definitions are valid");

    let steve = EntityId::player("steve");

    println!("--- Stats arrive from the ingestion pipeline ---");
    store.set_stat(&steve, "mined.total", 15_000.0);
    store.set_stat(&steve, "custom.play_time", 100_000.0);

    println!("\n--- Evaluating claimable tiers ---");
    let tiers = engine.evaluate_claimable(&steve).expect("store is in memory");
    for tier in &tiers {
        println!(
            "  {} tier {}: {:?} ({} / {})",
            tier.achievement_id, tier.tier_number, tier.state, tier.current_value, tier.threshold
        );
    }

    println!("\n--- Claiming every reached tier ---");
    for tier in tiers.iter().filter(|t| t.claimable) {
        let receipt = engine.claim(&steve, &tier.tier_id).expect("tier is claimable");
        println!(
            "  Claimed {} ({}): +{} XP, now {} XP, level {}",
            receipt.achievement_name, receipt.tier_name, receipt.xp_awarded,
            receipt.new_total_xp, receipt.new_level
        );
    }

    println!("\n--- A duplicate claim is a benign no-op ---");
    match engine.claim(&steve, "mining_1") {
        Ok(_) => println!("  unexpected second award!"),
        Err(err) => println!("  {} (benign: {})", error::user_message(&err), err.is_benign()),
    }

    println!("\n--- An admin claims on a player's behalf ---");
    let moderator = Actor::new("mod_ava", Role::Moderator);
    store.set_stat(&steve, "killed.total", 250.0);
    match engine.claim_as_admin(&moderator, &steve, "combat_1") {
        Ok(receipt) => println!(
            "  {} claimed by {:?}: +{} XP",
            receipt.tier_name, receipt.claimed_by, receipt.xp_awarded
        ),
        Err(err) => println!("  failed: {err}"),
    }

    let level = engine.level_of(&steve).expect("store is in memory");
    println!(
        "\n=== Final: level {} with {} XP ({}% through the band) ===",
        level.level, level.total_xp, level.progress
    );
}
