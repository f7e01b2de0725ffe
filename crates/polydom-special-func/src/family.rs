//! Memoized three-term recurrence families.

use std::sync::Arc;

use parking_lot::RwLock;
use polydom_poly::{Domain, Polynomial};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// A polynomial family `P₀, P₁, Pₙ = step·Pₙ₋₁ - Pₙ₋₂` with a lazy cache.
///
/// The cache maps an index to a fully built polynomial. Entries are inserted
/// whole behind a write lock and never evicted or replaced: if two threads
/// race on the same index, both compute the (identical) value and the first
/// insert wins, so every caller observes the same `Arc`.
///
/// No lock is held while a term is being computed, which keeps reentrant
/// calls from deadlocking.
#[derive(Debug)]
pub struct OrthogonalFamily {
    symbol: char,
    p0: Polynomial,
    p1: Polynomial,
    step: Polynomial,
    cache: RwLock<FxHashMap<usize, Arc<Polynomial>>>,
}

impl OrthogonalFamily {
    /// Creates a family with an empty cache.
    ///
    /// `symbol` is used for labels such as `T₃(x)`.
    #[must_use]
    pub fn new(symbol: char, p0: Polynomial, p1: Polynomial, step: Polynomial) -> Self {
        Self {
            symbol,
            p0,
            p1,
            step,
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    /// Returns the family symbol.
    #[must_use]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Returns the domain shared by the seeds and the recurrence step.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.p0.domain().shared(&self.p1.domain()).shared(&self.step.domain())
    }

    /// Returns the number of cached terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Returns true if nothing has been generated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Returns true if term `n` is cached.
    #[must_use]
    pub fn is_cached(&self, n: usize) -> bool {
        self.cache.read().contains_key(&n)
    }

    /// Returns the label of term `n`, e.g. `U₁₂(x)`.
    #[must_use]
    pub fn label(&self, n: usize) -> String {
        format!("{}{}(x)", self.symbol, subscript(n))
    }

    /// Returns term `n`, generating and caching any missing terms below it.
    #[must_use]
    pub fn get(&self, n: usize) -> Arc<Polynomial> {
        if let Some(hit) = self.lookup(n) {
            trace!(family = %self.symbol, n, "cache hit");
            return hit;
        }

        debug!(family = %self.symbol, n, cached = self.len(), "extending family");

        let mut older = self.term(0, || self.p0.clone().with_label(self.label(0)));
        if n == 0 {
            return older;
        }

        let mut newer = self.term(1, || self.p1.clone().with_label(self.label(1)));
        for k in 2..=n {
            let next = self.term(k, || {
                self.step
                    .clone()
                    .with_label(self.label(k))
                    .mul(&newer)
                    .sub(&older)
            });
            older = std::mem::replace(&mut newer, next);
        }
        newer
    }

    fn lookup(&self, n: usize) -> Option<Arc<Polynomial>> {
        self.cache.read().get(&n).cloned()
    }

    fn term(&self, k: usize, build: impl FnOnce() -> Polynomial) -> Arc<Polynomial> {
        if let Some(hit) = self.lookup(k) {
            return hit;
        }

        trace!(family = %self.symbol, k, "cache miss");
        let built = Arc::new(build());
        self.cache.write().entry(k).or_insert(built).clone()
    }
}

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Renders `n` with Unicode subscript digits.
#[must_use]
pub fn subscript(n: usize) -> String {
    n.to_string()
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| SUBSCRIPT_DIGITS[d as usize]))
        .collect()
}
