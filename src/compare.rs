//! Key ordering.
//!
//! A list is ordered by a strict-less-than predicate fixed at construction.
//! The predicate must be a strict weak order for the lifetime of the list:
//! irreflexive, asymmetric and transitive. Two keys are equal when neither
//! is less than the other. A predicate that breaks these rules leaves the
//! ordering of the list unspecified (lookups may miss, iteration may be out
//! of order) but never causes memory unsafety.

/// A strict-less-than predicate over keys.
pub trait Comparator<K: ?Sized> {
    /// Whether `a` sorts strictly before `b`.
    fn less(&self, a: &K, b: &K) -> bool;

    /// Whether neither key sorts before the other.
    #[inline]
    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

/// Orders keys by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order() {
        assert!(Natural.less(&1, &2));
        assert!(!Natural.less(&2, &1));
        assert!(!Natural.less(&2, &2));
        assert!(Natural.equivalent(&2, &2));
        assert!(Natural.less("apple", "banana"));
    }

    #[test]
    fn closures_are_comparators() {
        let reverse = |a: &i32, b: &i32| a > b;
        assert!(reverse.less(&2, &1));
        assert!(!reverse.less(&1, &2));
    }

    #[test]
    fn equivalence_follows_the_predicate() {
        let by_len = |a: &&str, b: &&str| a.len() < b.len();
        assert!(by_len.equivalent(&"abc", &"xyz"));
        assert!(!by_len.equivalent(&"ab", &"xyz"));
    }
}
