use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_set::{Difference, Intersection, SymmetricDifference, Union};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::Iter;
use crate::util::fmt::DebugRaw;

/// An unordered collection of unique items, used purely for membership.
///
/// Items are unique by [`Eq`] and located by [`Hash`]. No iteration order is guaranteed, but every
/// item is visited exactly once.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Set.
/// - `m`: The number of items in the second Set.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(1)`*, `O(n)` |
/// | `contains` | `O(1)` |
/// | `delete` | `O(1)` |
/// | `from_slice` | `O(n)` |
/// | `is_subset` | `O(n)` |
/// | `is_superset` | `O(m)` |
///
/// \* If the Set doesn't have enough capacity for the new item, `add` will take `O(n)` to grow.
pub struct Set<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) inner: HashSet<T, B>,
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a new, empty Set. Memory is allocated on the first insertion.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::Set;
    /// let set: Set<u8> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Set<T> {
        Set {
            inner: HashSet::new(),
        }
    }

    /// Creates a new Set able to hold at least `cap` items without reallocating. The capacity is a
    /// hint only: the Set keeps growing past it.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::Set;
    /// let mut set = Set::with_cap(2);
    /// assert!(set.cap() >= 2);
    /// set.add_all(0..10);
    /// assert_eq!(set.len(), 10);
    /// ```
    pub fn with_cap(cap: usize) -> Set<T> {
        Set {
            inner: HashSet::with_capacity(cap),
        }
    }

    /// Creates a Set containing every item of `items`, deduplicated.
    ///
    /// # Examples
    /// ```
    /// # use toolkit::collections::Set;
    /// let set = Set::from_slice(&["a", "b", "a"]);
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains("a"));
    /// ```
    pub fn from_slice(items: &[T]) -> Set<T>
    where
        T: Clone,
    {
        let mut set = Set::with_cap(items.len());
        set.add_all(items.iter().cloned());
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T, B> {
    pub fn with_hasher(hasher: B) -> Set<T, B> {
        Set {
            inner: HashSet::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Set<T, B> {
        Set {
            inner: HashSet::with_capacity_and_hasher(cap, hasher),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of items the Set can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Adds `item` to the Set, returning true if it wasn't already present. Adding an item that is
    /// already present leaves the Set unchanged.
    pub fn add(&mut self, item: T) -> bool {
        self.inner.insert(item)
    }

    /// Adds every item produced by `items`, in order.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(item)
    }

    /// Removes `item` from the Set, returning it if it was present. Deleting an item that isn't in
    /// the Set does nothing.
    pub fn delete<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.take(item)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Returns an iterator over all items in the Set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Creates a borrowed iterator over all items that are in `self` but not `other`. (`self \
    /// other`)
    pub fn difference<'a>(&'a self, other: &'a Set<T, B>) -> Difference<'a, T, B> {
        self.inner.difference(&other.inner)
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    pub fn symmetric_difference<'a>(
        &'a self,
        other: &'a Set<T, B>,
    ) -> SymmetricDifference<'a, T, B> {
        self.inner.symmetric_difference(&other.inner)
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`. (`self ∩
    /// other`)
    pub fn intersection<'a>(&'a self, other: &'a Set<T, B>) -> Intersection<'a, T, B> {
        self.inner.intersection(&other.inner)
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`. (`self ∪
    /// other`)
    pub fn union<'a>(&'a self, other: &'a Set<T, B>) -> Union<'a, T, B> {
        self.inner.union(&other.inner)
    }

    /// Returns true if `other` contains all items of `self`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &Set<T, B>) -> bool {
        for item in self {
            if !other.contains(item) {
                return false;
            }
        }
        true
    }

    /// Returns true if `self` contains all items of `other`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &Set<T, B>) -> bool {
        other.is_subset(self)
    }
}

impl<T: Hash + Eq> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for Set<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = Set::with_cap_and_hasher(iter.size_hint().0, B::default());

        for item in iter {
            set.add(item);
        }

        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Clone for Set<T, B> {
    fn clone(&self) -> Self {
        let mut set = Set::with_cap_and_hasher(self.len(), B::default());
        set.add_all(self.iter().cloned());
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for Set<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for Set<T, B> {}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &Set<T, B> {
    type Output = Set<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Set")
            .field(
                "contents",
                &DebugRaw(format!(
                    "#{{{}}}",
                    self.iter()
                        .map(|i| format!("{i:?}"))
                        .collect::<Vec<String>>()
                        .join(", ")
                )),
            )
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "#{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
