use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

pub trait ArenaKey: Copy + Eq {
    fn from_usize(value: usize) -> Self;
    fn into_usize(self) -> usize;
}

/// A map from a generated typed key to a value. Insertion allocates a key
/// that has never been used before, so removed keys are never recycled and a
/// stale key can never alias a live value.
#[derive(Clone)]
pub struct Arena<K, V> {
    next_id: usize,
    map: BTreeMap<usize, V>,
    marker: PhantomData<K>,
}

impl<K: ArenaKey, V> Arena<K, V> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            map: BTreeMap::new(),
            marker: PhantomData,
        }
    }

    pub fn insert(&mut self, value: V) -> K {
        let id = self.next_id;
        self.next_id += 1;
        self.map.insert(id, value);
        K::from_usize(id)
    }

    pub fn remove(&mut self, id: K) -> Option<V> {
        self.map.remove(&id.into_usize())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl<K: ArenaKey, V> Index<K> for Arena<K, V> {
    type Output = V;

    fn index(&self, index: K) -> &V {
        self.map.get(&index.into_usize()).unwrap()
    }
}

impl<K: ArenaKey, V> IndexMut<K> for Arena<K, V> {
    fn index_mut(&mut self, index: K) -> &mut V {
        self.map.get_mut(&index.into_usize()).unwrap()
    }
}

impl<K, V: Debug> Debug for Arena<K, V> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(&self.map, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    struct Id(usize);

    impl ArenaKey for Id {
        fn from_usize(value: usize) -> Self {
            Self(value)
        }

        fn into_usize(self) -> usize {
            self.0
        }
    }

    #[test]
    fn insert_generates_fresh_keys() {
        let mut arena = Arena::<Id, &str>::new();

        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_ne!(a, b);
        assert_eq!(arena[a], "a");
        assert_eq!(arena[b], "b");
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn removed_keys_are_not_recycled() {
        let mut arena = Arena::<Id, u32>::new();

        let a = arena.insert(1);
        assert_eq!(arena.remove(a), Some(1));
        assert_eq!(arena.remove(a), None);

        let b = arena.insert(2);
        assert_ne!(a, b);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn index_mut_updates_in_place() {
        let mut arena = Arena::<Id, u32>::new();

        let a = arena.insert(1);
        arena[a] += 10;

        assert_eq!(arena[a], 11);
    }
}
