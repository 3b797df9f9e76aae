//! Cache Entry Module
//!
//! Admission rules for keys and values, and the result of a `put`.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

// == Blank ==
/// Marks values that a cache refuses to store.
///
/// A `put` whose key or value is blank is ignored without error. Empty
/// strings and collections, `None` and `()` are blank. Numbers (floats
/// included, even zero and NaN), `bool` and `char` never are. Smart
/// pointers and `Cow` defer to what they point at.
///
/// Implement it for your own payload types; a type that is never empty
/// just returns `false`.
pub trait Blank {
    /// Returns true if the value is empty or absent.
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for VecDeque<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Blank for HashMap<K, V, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Blank for HashSet<T, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Blank for BTreeMap<K, V> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for BTreeSet<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        match self {
            Some(inner) => inner.is_blank(),
            None => true,
        }
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank + ?Sized> Blank for Box<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank + ?Sized> Blank for Rc<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank + ?Sized> Blank for Arc<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<B> Blank for Cow<'_, B>
where
    B: Blank + ToOwned + ?Sized,
{
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl Blank for () {
    fn is_blank(&self) -> bool {
        true
    }
}

macro_rules! never_blank {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Blank for $ty {
                fn is_blank(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_blank!(
    bool, char, f32, f64, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

// == Put Outcome ==
/// What a `put` did to the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome<K, V> {
    /// Key and value stored (new entry or overwrite), nothing evicted
    Stored,
    /// Blank key or value, cache left untouched
    Rejected,
    /// Stored after evicting the given entry to make room
    Evicted { key: K, value: V },
}

impl<K, V> PutOutcome<K, V> {
    /// Returns the evicted key, if the put caused an eviction.
    pub fn evicted_key(&self) -> Option<&K> {
        match self {
            PutOutcome::Evicted { key, .. } => Some(key),
            _ => None,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_strings() {
        assert!("".is_blank());
        assert!(String::new().is_blank());
        assert!(!"a".is_blank());
        assert!(!"a".to_string().is_blank());
    }

    #[test]
    fn test_blank_options() {
        let none: Option<&str> = None;
        assert!(none.is_blank());
        assert!(Some("").is_blank());
        assert!(!Some("x").is_blank());
    }

    #[test]
    fn test_blank_collections() {
        assert!(Vec::<u8>::new().is_blank());
        assert!(!vec![1u8].is_blank());
        assert!(Box::<str>::from("").is_blank());
    }

    #[test]
    fn test_blank_std_collections() {
        let mut map = HashMap::new();
        assert!(map.is_blank());
        map.insert("k", 1);
        assert!(!map.is_blank());

        assert!(HashSet::<u8>::new().is_blank());
        assert!(!HashSet::from([1u8]).is_blank());
        assert!(BTreeMap::<u8, u8>::new().is_blank());
        assert!(!BTreeMap::from([(1u8, 2u8)]).is_blank());
        assert!(BTreeSet::<u8>::new().is_blank());
        assert!(VecDeque::<u8>::new().is_blank());
        assert!(!VecDeque::from(vec![1u8]).is_blank());
    }

    #[test]
    fn test_blank_smart_pointers() {
        assert!(Rc::<str>::from("").is_blank());
        assert!(!Rc::new("x".to_string()).is_blank());
        assert!(Arc::<str>::from("").is_blank());
        assert!(!Arc::new(vec![1u8]).is_blank());

        let borrowed: Cow<'_, str> = Cow::Borrowed("");
        let owned: Cow<'_, str> = Cow::Owned("x".to_string());
        assert!(borrowed.is_blank());
        assert!(!owned.is_blank());
    }

    #[test]
    fn test_numbers_never_blank() {
        assert!(!0u32.is_blank());
        assert!(!0i64.is_blank());
        assert!(!0.0f32.is_blank());
        assert!(!(-0.0f64).is_blank());
        assert!(!f64::NAN.is_blank());
        assert!(!false.is_blank());
    }

    #[test]
    fn test_put_outcome_accessors() {
        let stored: PutOutcome<&str, u32> = PutOutcome::Stored;
        let rejected: PutOutcome<&str, u32> = PutOutcome::Rejected;
        let evicted = PutOutcome::Evicted { key: "A", value: 1 };

        assert_eq!(stored.evicted_key(), None);
        assert_eq!(rejected.evicted_key(), None);
        assert_eq!(evicted.evicted_key(), Some(&"A"));
    }
}
