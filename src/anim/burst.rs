use super::reaction::ReactionStore;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// A timed run of appends of a single glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BurstPlan {
    pub symbol: &'static str,
    pub count: usize,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl BurstPlan {
    pub const FINALE: BurstPlan = BurstPlan {
        symbol: "❤️",
        count: 100,
        min_delay_ms: 10,
        max_delay_ms: 20,
    };
}

impl Default for BurstPlan {
    fn default() -> Self {
        Self::FINALE
    }
}

/// Shared "view is gone" flag. Clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Steps a [`BurstPlan`]: ask for the next delay, wait it out, then
/// `fire` to learn whether the append should still happen.
pub struct Burst {
    plan: BurstPlan,
    fired: usize,
    token: CancelToken,
}

impl Burst {
    pub fn new(plan: BurstPlan, token: CancelToken) -> Self {
        Self {
            plan,
            fired: 0,
            token,
        }
    }

    pub fn plan(&self) -> &BurstPlan {
        &self.plan
    }

    pub fn fired(&self) -> usize {
        self.fired
    }

    pub fn remaining(&self) -> usize {
        self.plan.count - self.fired
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Delay before the next append, or `None` when finished or cancelled.
    pub fn next_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Duration> {
        if self.is_cancelled() || self.remaining() == 0 {
            return None;
        }
        let ms = rng.gen_range(self.plan.min_delay_ms..=self.plan.max_delay_ms);
        Some(Duration::from_millis(ms))
    }

    /// Symbol to append now, or `None` if the view was torn down during the wait.
    pub fn fire(&mut self) -> Option<&'static str> {
        if self.is_cancelled() || self.remaining() == 0 {
            return None;
        }
        self.fired += 1;
        Some(self.plan.symbol)
    }
}

/// Append from a tap, unless the view has been torn down.
pub fn append_if_live(store: &mut ReactionStore, token: &CancelToken, symbol: &str) -> bool {
    if token.is_cancelled() {
        return false;
    }
    store.append(symbol);
    true
}
