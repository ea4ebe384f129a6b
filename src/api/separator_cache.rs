use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Quantized separator position used to reuse elements across redraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(OrderedFloat<f64>);

impl CacheKey {
    /// Snaps `index` onto the `tolerance` grid: `round(index / tolerance) * tolerance`.
    ///
    /// A non-positive or non-finite tolerance keys on the raw index.
    #[must_use]
    pub fn quantize(index: f64, tolerance: f64) -> Self {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Self(OrderedFloat(index));
        }
        // `+ 0.0` folds negative zero onto the zero bucket.
        Self(OrderedFloat((index / tolerance).round() * tolerance + 0.0))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }
}

/// Lifecycle of a separator element relative to the previous redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeparationState {
    /// Drawn for the first time, either on the axis's first pass or as a fresh key.
    InitialAdd,
    /// Present in the previous pass and in this one.
    Keep,
    /// Dropped by this pass; handed back to the surface for release.
    Remove,
}

/// One on-screen tick and label, with the surface's visual object `V`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparatorElement<V> {
    pub key: CacheKey,
    pub value: f64,
    pub generation: u64,
    /// Generation of the pass that inserted the element.
    pub created_generation: u64,
    pub is_new: bool,
    pub is_header: bool,
    pub state: SeparationState,
    pub label: String,
    /// Surface-owned visual; `None` until the surface first renders the element.
    pub visual: Option<V>,
}

impl<V> SeparatorElement<V> {
    fn new(key: CacheKey, generation: u64) -> Self {
        Self {
            key,
            value: key.value(),
            generation,
            created_generation: generation,
            is_new: true,
            is_header: false,
            state: SeparationState::InitialAdd,
            label: String::new(),
            visual: None,
        }
    }

    /// Whether the element was inserted during pass `generation`.
    #[must_use]
    pub fn created_in(&self, generation: u64) -> bool {
        self.created_generation == generation
    }
}

/// Runtime metrics exposed by the separator cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeparatorCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub size: usize,
    pub generation: u64,
}

/// Generation-stamped arena of separator elements keyed by [`CacheKey`].
///
/// A redraw calls [`begin_pass`](Self::begin_pass), resolves every visible key,
/// then sweeps: whatever still carries an older generation was not drawn.
#[derive(Debug)]
pub struct SeparatorCache<V> {
    entries: IndexMap<CacheKey, SeparatorElement<V>>,
    generation: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<V> Default for SeparatorCache<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            generation: 0,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }
}

impl<V> SeparatorCache<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new redraw generation and returns it.
    pub fn begin_pass(&mut self) -> u64 {
        self.generation = self.generation.saturating_add(1);
        self.generation
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the element for `key`, creating it on a miss.
    ///
    /// The flag is `true` only when the element was inserted by this call.
    /// Either way the element is stamped with the current generation.
    pub fn resolve(&mut self, key: CacheKey) -> (&mut SeparatorElement<V>, bool) {
        let generation = self.generation;
        let is_new = !self.entries.contains_key(&key);
        if is_new {
            self.misses = self.misses.saturating_add(1);
        } else {
            self.hits = self.hits.saturating_add(1);
        }

        let element = self
            .entries
            .entry(key)
            .or_insert_with(|| SeparatorElement::new(key, generation));
        element.is_new = is_new;
        element.generation = generation;
        (element, is_new)
    }

    #[must_use]
    pub fn get(&self, key: CacheKey) -> Option<&SeparatorElement<V>> {
        self.entries.get(&key)
    }

    /// Elements not stamped by the current pass, in insertion order.
    #[must_use]
    pub fn sweep(&self) -> Vec<&SeparatorElement<V>> {
        self.entries
            .values()
            .filter(|element| element.generation < self.generation)
            .collect()
    }

    /// Removes the stale set and returns it with `state` set to [`SeparationState::Remove`].
    pub fn evict_stale(&mut self) -> Vec<SeparatorElement<V>> {
        let generation = self.generation;
        let mut stale = Vec::new();
        let entries = std::mem::take(&mut self.entries);
        for (key, mut element) in entries {
            if element.generation >= generation {
                self.entries.insert(key, element);
                continue;
            }
            trace!(key = key.value(), value = element.value, "evict stale separator");
            element.state = SeparationState::Remove;
            stale.push(element);
        }
        self.evictions = self.evictions.saturating_add(stale.len() as u64);
        stale
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeparatorElement<V>> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every element without touching the generation counter.
    pub fn clear(&mut self) -> Vec<SeparatorElement<V>> {
        self.evictions = self.evictions.saturating_add(self.entries.len() as u64);
        self.entries
            .drain(..)
            .map(|(_, mut element)| {
                element.state = SeparationState::Remove;
                element
            })
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> SeparatorCacheStats {
        SeparatorCacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            size: self.entries.len(),
            generation: self.generation,
        }
    }
}
