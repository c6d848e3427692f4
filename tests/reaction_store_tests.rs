// Host-side tests for the reaction store.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod anim {
    pub mod constants {
        include!("../src/anim/constants.rs");
    }
    pub mod reaction {
        include!("../src/anim/reaction.rs");
    }
}

use anim::constants::*;
use anim::reaction::*;
use instant::Instant;
use std::time::Duration;

fn make_store() -> ReactionStore {
    ReactionStore::new(ReactionParams::default(), 42)
}

#[test]
fn new_store_is_empty() {
    let store = make_store();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.snapshot().is_empty());
}

#[test]
fn append_keeps_insertion_order() {
    let mut store = make_store();
    let t0 = Instant::now();
    for (i, symbol) in ["❤️", "🎉", "🔥", "❤️"].iter().enumerate() {
        store.append_at(symbol, t0 + Duration::from_millis(i as u64 * 10));
    }
    let symbols: Vec<&str> = store.snapshot().iter().map(|r| r.symbol()).collect();
    assert_eq!(symbols, vec!["❤️", "🎉", "🔥", "❤️"]);
    let times: Vec<Instant> = store.snapshot().iter().map(|r| r.spawned_at()).collect();
    assert!(times.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn sampled_parameters_stay_within_ranges() {
    let mut store = make_store();
    let t0 = Instant::now();
    for _ in 0..500 {
        store.append_at("❤️", t0);
    }
    for r in store.snapshot() {
        assert!((VERTICAL_DISTANCE_MIN..=VERTICAL_DISTANCE_MAX).contains(&r.vertical_distance()));
        assert!(
            (HORIZONTAL_DISTANCE_MIN..=HORIZONTAL_DISTANCE_MAX).contains(&r.horizontal_distance())
        );
        let life = r.lifetime().as_secs_f64();
        assert!(life >= LIFETIME_MIN_SEC - 1e-9 && life <= LIFETIME_MAX_SEC + 1e-9);
        assert!(!r.lifetime().is_zero());
    }
    // both drift directions show up
    assert!(store.snapshot().iter().any(|r| r.horizontal_distance() < 0.0));
    assert!(store.snapshot().iter().any(|r| r.horizontal_distance() > 0.0));
}

#[test]
fn same_seed_gives_same_motion() {
    let t0 = Instant::now();
    let mut a = make_store();
    let mut b = make_store();
    for _ in 0..20 {
        a.append_at("🔥", t0);
        b.append_at("🔥", t0);
    }
    for (ra, rb) in a.snapshot().iter().zip(b.snapshot()) {
        assert_eq!(ra.vertical_distance(), rb.vertical_distance());
        assert_eq!(ra.horizontal_distance(), rb.horizontal_distance());
        assert_eq!(ra.lifetime(), rb.lifetime());
    }
}

#[test]
fn fixed_params_produce_exact_values() {
    let mut store = ReactionStore::new(ReactionParams::fixed(0.6, 0.5, 1.5), 7);
    store.append_at("❤️", Instant::now());
    let r = &store.snapshot()[0];
    assert_eq!(r.vertical_distance(), 0.6);
    assert_eq!(r.horizontal_distance(), 0.5);
    assert_eq!(r.lifetime(), Duration::from_secs_f64(1.5));
}

#[test]
fn evict_removes_matches_and_preserves_order() {
    let mut store = make_store();
    let t0 = Instant::now();
    for symbol in ["a", "b", "c", "d", "e"] {
        store.append_at(symbol, t0);
    }
    let removed = store.evict(|r| r.symbol() == "b" || r.symbol() == "d");
    assert_eq!(removed, 2);
    let symbols: Vec<&str> = store.snapshot().iter().map(|r| r.symbol()).collect();
    assert_eq!(symbols, vec!["a", "c", "e"]);
}

#[test]
fn evict_with_no_matches_is_a_no_op() {
    let mut store = make_store();
    store.append("❤️");
    assert_eq!(store.evict(|_| false), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn expired_reaction_is_gone_after_one_pass() {
    let mut store = ReactionStore::new(ReactionParams::fixed(0.6, 0.5, 1.5), 1);
    let t0 = Instant::now();
    store.append_at("❤️", t0);

    // age == lifetime is still visible
    assert_eq!(store.evict_expired(t0 + Duration::from_millis(1500)), 0);
    assert_eq!(store.len(), 1);

    assert_eq!(store.evict_expired(t0 + Duration::from_millis(1501)), 1);
    assert!(store.is_empty());
}

#[test]
fn store_drains_after_max_lifetime() {
    let mut store = make_store();
    let t0 = Instant::now();
    for i in 0..250 {
        store.append_at(if i % 2 == 0 { "❤️" } else { "🎉" }, t0);
    }
    let later = t0 + store.params().max_lifetime() + Duration::from_millis(1);
    assert_eq!(store.evict_expired(later), 250);
    assert!(store.is_empty());
}

#[test]
fn eviction_only_touches_expired_reactions() {
    let mut store = ReactionStore::new(ReactionParams::fixed(0.6, 0.0, 1.0), 3);
    let t0 = Instant::now();
    store.append_at("old", t0);
    store.append_at("new", t0 + Duration::from_millis(800));
    assert_eq!(store.evict_expired(t0 + Duration::from_millis(1200)), 1);
    assert_eq!(store.snapshot()[0].symbol(), "new");
}

#[test]
fn age_is_zero_before_spawn() {
    let t0 = Instant::now();
    let r = Reaction::new("❤️", t0 + Duration::from_millis(50), 0.5, 0.0, Duration::from_secs(1));
    assert_eq!(r.age_at(t0), Duration::ZERO);
    assert_eq!(r.progress_at(t0), 0.0);
    assert!(!r.is_expired_at(t0));
}

#[test]
fn clear_empties_the_store() {
    let mut store = make_store();
    store.append("❤️");
    store.append("🔥");
    store.clear();
    assert!(store.is_empty());
}
