use crate::{FontSpec, Pt};
use lru::LruCache;
use rustc_hash::{FxBuildHasher, FxHasher};
use std::{
    cell::RefCell,
    hash::{Hash, Hasher},
    num::NonZeroUsize,
};

/// Default number of measurements a [CachedMeasurer] keeps
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Measures the rendered width of text in a given font.
///
/// Implementations must be deterministic: the same text in the same font always
/// measures the same. The wrapper calls [`Measurer::measure`] once per trial
/// string and never caches results itself.
pub trait Measurer {
    /// The advance width of `text` when set in `font`, in the same units as the
    /// maximum line width handed to the wrapper
    fn measure(&self, text: &str, font: &FontSpec) -> Pt;
}

impl<F> Measurer for F
where
    F: Fn(&str, &FontSpec) -> Pt,
{
    fn measure(&self, text: &str, font: &FontSpec) -> Pt {
        self(text, font)
    }
}

/// A measurer where every character has the same advance regardless of font.
/// Useful for terminal-style output and for predictable layouts in tests.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Monospace {
    pub advance: Pt,
}

impl Monospace {
    pub fn new<P: Into<Pt>>(advance: P) -> Monospace {
        Monospace {
            advance: advance.into(),
        }
    }
}

impl Default for Monospace {
    fn default() -> Self {
        Monospace { advance: Pt(1.0) }
    }
}

impl Measurer for Monospace {
    fn measure(&self, text: &str, _font: &FontSpec) -> Pt {
        self.advance * text.chars().count() as f32
    }
}

/// Memoizes another measurer per `(text, font)` pair, keeping at most
/// `capacity` of the most recently used measurements.
///
/// The cache lives behind a [RefCell], so a `CachedMeasurer` is meant to be owned
/// by a single caller (it is not [Sync]). Re-wrapping the same text at a new width
/// re-measures mostly the same fragments, which is where this pays off.
pub struct CachedMeasurer<M> {
    inner: M,
    cache: RefCell<LruCache<u64, Entry, FxBuildHasher>>,
}

/// A cached width along with the pair it was measured for, so that two pairs
/// sharing a hash never hand out each other's widths
struct Entry {
    text: String,
    font: FontSpec,
    width: Pt,
}

fn cache_key(text: &str, font: &FontSpec) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    font.hash(&mut hasher);
    hasher.finish()
}

impl<M: Measurer> CachedMeasurer<M> {
    pub fn new(inner: M) -> CachedMeasurer<M> {
        CachedMeasurer::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    /// A cache holding at most `capacity` measurements. A capacity of zero is
    /// treated as one.
    pub fn with_capacity(inner: M, capacity: usize) -> CachedMeasurer<M> {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        CachedMeasurer {
            inner,
            cache: RefCell::new(LruCache::with_hasher(capacity, FxBuildHasher)),
        }
    }

    /// Number of distinct measurements held
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.borrow().cap().get()
    }

    /// Forget everything measured so far, e.g. after fonts were reloaded
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Unwrap the inner measurer, discarding the cache
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Measurer> Measurer for CachedMeasurer<M> {
    fn measure(&self, text: &str, font: &FontSpec) -> Pt {
        let key = cache_key(text, font);
        if let Some(entry) = self.cache.borrow_mut().get(&key) {
            if entry.text == text && entry.font == *font {
                return entry.width;
            }
        }

        let width = self.inner.measure(text, font);
        self.cache.borrow_mut().put(
            key,
            Entry {
                text: text.to_string(),
                font: font.clone(),
                width,
            },
        );
        width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn closures_measure() {
        let measure = |text: &str, _: &FontSpec| Pt(text.len() as f32 * 2.0);
        assert_eq!(measure.measure("abc", &"serif".into()), Pt(6.0));
    }

    #[test]
    fn monospace_counts_chars() {
        let font = FontSpec::from("12px monospace");
        assert_eq!(Monospace::default().measure("héllo", &font), Pt(5.0));
        assert_eq!(Monospace::new(Pt(0.5)).measure("ab", &font), Pt(1.0));
        assert_eq!(Monospace::default().measure("", &font), Pt(0.0));
    }

    #[test]
    fn cache_measures_each_pair_once() {
        let calls = Cell::new(0usize);
        let counting = |text: &str, _: &FontSpec| {
            calls.set(calls.get() + 1);
            Pt(text.chars().count() as f32)
        };
        let cached = CachedMeasurer::new(counting);
        let serif = FontSpec::from("serif");
        let sans = FontSpec::from("sans-serif");

        assert_eq!(cached.measure("abc", &serif), Pt(3.0));
        assert_eq!(cached.measure("abc", &serif), Pt(3.0));
        assert_eq!(calls.get(), 1);

        cached.measure("abc", &sans);
        assert_eq!(calls.get(), 2);
        assert_eq!(cached.len(), 2);

        cached.clear();
        assert!(cached.is_empty());
        cached.measure("abc", &serif);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn cache_is_bounded() {
        let calls = Cell::new(0usize);
        let counting = |text: &str, _: &FontSpec| {
            calls.set(calls.get() + 1);
            Pt(text.chars().count() as f32)
        };
        let cached = CachedMeasurer::with_capacity(counting, 3);
        let font = FontSpec::from("serif");
        assert_eq!(cached.capacity(), 3);

        for n in 0..10 {
            cached.measure(&"x".repeat(n), &font);
            assert!(cached.len() <= 3);
        }
        assert_eq!(calls.get(), 10);
        assert_eq!(cached.len(), 3);

        // the most recent entries are still there, the oldest were evicted
        assert_eq!(cached.measure(&"x".repeat(9), &font), Pt(9.0));
        assert_eq!(calls.get(), 10);
        assert_eq!(cached.measure("", &font), Pt(0.0));
        assert_eq!(calls.get(), 11);
    }

    #[test]
    fn zero_capacity_still_caches_one() {
        let cached = CachedMeasurer::with_capacity(Monospace::default(), 0);
        assert_eq!(cached.capacity(), 1);
        assert_eq!(cached.measure("ab", &"serif".into()), Pt(2.0));
        assert_eq!(cached.len(), 1);
    }
}
