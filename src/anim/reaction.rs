use super::constants::*;
use instant::Instant;
use rand::prelude::*;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Ranges the per-reaction motion parameters are drawn from.
#[derive(Clone, Debug, PartialEq)]
pub struct ReactionParams {
    pub vertical_distance: RangeInclusive<f64>,
    pub horizontal_distance: RangeInclusive<f64>,
    pub lifetime_sec: RangeInclusive<f64>,
}

impl Default for ReactionParams {
    fn default() -> Self {
        Self {
            vertical_distance: VERTICAL_DISTANCE_MIN..=VERTICAL_DISTANCE_MAX,
            horizontal_distance: HORIZONTAL_DISTANCE_MIN..=HORIZONTAL_DISTANCE_MAX,
            lifetime_sec: LIFETIME_MIN_SEC..=LIFETIME_MAX_SEC,
        }
    }
}

impl ReactionParams {
    /// Degenerate ranges, so every reaction gets exactly these values.
    pub fn fixed(vertical_distance: f64, horizontal_distance: f64, lifetime_sec: f64) -> Self {
        Self {
            vertical_distance: vertical_distance..=vertical_distance,
            horizontal_distance: horizontal_distance..=horizontal_distance,
            lifetime_sec: lifetime_sec..=lifetime_sec,
        }
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs_f64(*self.lifetime_sec.end())
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64, Duration) {
        let vertical = rng.gen_range(self.vertical_distance.clone());
        let horizontal = rng.gen_range(self.horizontal_distance.clone());
        let lifetime = Duration::from_secs_f64(rng.gen_range(self.lifetime_sec.clone()));
        (vertical, horizontal, lifetime)
    }
}

/// One floating glyph. Immutable once created.
#[derive(Clone, Debug)]
pub struct Reaction {
    symbol: String,
    spawned_at: Instant,
    vertical_distance: f64,
    horizontal_distance: f64,
    lifetime: Duration,
}

impl Reaction {
    pub fn new(
        symbol: impl Into<String>,
        spawned_at: Instant,
        vertical_distance: f64,
        horizontal_distance: f64,
        lifetime: Duration,
    ) -> Self {
        debug_assert!(!lifetime.is_zero(), "reaction lifetime must be positive");
        Self {
            symbol: symbol.into(),
            spawned_at,
            vertical_distance,
            horizontal_distance,
            lifetime,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn spawned_at(&self) -> Instant {
        self.spawned_at
    }

    pub fn vertical_distance(&self) -> f64 {
        self.vertical_distance
    }

    pub fn horizontal_distance(&self) -> f64 {
        self.horizontal_distance
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Time since spawn; zero when `now` is earlier than the spawn time.
    pub fn age_at(&self, now: Instant) -> Duration {
        if now > self.spawned_at {
            now - self.spawned_at
        } else {
            Duration::ZERO
        }
    }

    /// Animation progress `age / lifetime`. Not clamped: past expiry it exceeds 1.
    pub fn progress_at(&self, now: Instant) -> f64 {
        self.age_at(now).as_secs_f64() / self.lifetime.as_secs_f64()
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.age_at(now) > self.lifetime
    }
}

/// Active reactions in spawn order (which is also draw order).
pub struct ReactionStore {
    reactions: Vec<Reaction>,
    params: ReactionParams,
    rng: StdRng,
}

impl ReactionStore {
    pub fn new(params: ReactionParams, seed: u64) -> Self {
        Self {
            reactions: Vec::new(),
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy(params: ReactionParams) -> Self {
        Self {
            reactions: Vec::new(),
            params,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn params(&self) -> &ReactionParams {
        &self.params
    }

    pub fn append(&mut self, symbol: &str) {
        self.append_at(symbol, Instant::now());
    }

    pub fn append_at(&mut self, symbol: &str, now: Instant) {
        let (vertical, horizontal, lifetime) = self.params.sample(&mut self.rng);
        self.push(Reaction::new(symbol, now, vertical, horizontal, lifetime));
    }

    pub fn push(&mut self, reaction: Reaction) {
        self.reactions.push(reaction);
    }

    /// Drop every reaction matching `predicate` in one pass, keeping the
    /// survivors in order. Returns how many were removed.
    pub fn evict<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Reaction) -> bool,
    {
        let before = self.reactions.len();
        self.reactions.retain(|r| !predicate(r));
        before - self.reactions.len()
    }

    pub fn evict_expired(&mut self, now: Instant) -> usize {
        self.evict(|r| r.is_expired_at(now))
    }

    pub fn snapshot(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    pub fn clear(&mut self) {
        self.reactions.clear();
    }
}
