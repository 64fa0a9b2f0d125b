use crate::entry::Entry;
use crate::error::Result;
use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree;
use log::{debug, trace};
use rand::Rng;
use std::borrow::Borrow;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

/// Structural statistics of a validated tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeStats {
    /// The number of entries in the tree.
    pub len: usize,
    /// The number of black links on every path from the root to an empty subtree.
    pub black_height: usize,
    /// The length of the longest path from the root to a node. `None` if the tree is empty.
    pub height: Option<usize>,
}

/// An ordered map implemented using a left-leaning red black tree.
///
/// A red black tree is a self-balancing binary search tree that uses a color bit on each link to
/// keep the tree approximately balanced during insertions and removals. The left-leaning variant
/// only allows red links to lean left, which makes every node correspond to a node of a 2-3
/// tree. Each node also stores the size of its subtree, so the map supports logarithmic order
/// statistics queries.
///
/// # Examples
///
/// ```
/// use llrb_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
/// assert_eq!(map.rank(&3), 1);
/// assert_eq!(map.select(1), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct RedBlackMap<T, U> {
    tree: tree::Tree<T, U>,
}

impl<T, U> RedBlackMap<T, U> {
    /// Constructs a new, empty `RedBlackMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMap { tree: None }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will return
    /// and replace the old key-value pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)>
    where
        T: Ord,
    {
        let ret = tree::insert(&mut self.tree, Node::new(key, value));
        tree::blacken_root(&mut self.tree);
        ret.map(Entry::into_pair)
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None` and leave the map untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<(T, U)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        if !self.contains_key(key) {
            return None;
        }

        tree::fix_root(&mut self.tree);
        let ret = tree::remove(&mut self.tree, key);
        tree::blacken_root(&mut self.tree);
        ret.map(Entry::into_pair)
    }

    /// Removes the key-value pair with the minimum key from the map and returns it. Returns
    /// `None` and leaves the map untouched if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.remove_min(), Some((1, 1)));
    /// assert_eq!(map.remove_min(), Some((3, 3)));
    /// assert_eq!(map.remove_min(), None);
    /// ```
    pub fn remove_min(&mut self) -> Option<(T, U)> {
        if self.tree.is_none() {
            debug!("remove_min called on an empty map");
            return None;
        }

        tree::fix_root(&mut self.tree);
        let node = tree::remove_min(&mut self.tree);
        tree::blacken_root(&mut self.tree);
        Some(node.entry.into_pair())
    }

    /// Removes the key-value pair with the maximum key from the map and returns it. Returns
    /// `None` and leaves the map untouched if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.remove_max(), Some((3, 3)));
    /// assert_eq!(map.remove_max(), Some((1, 1)));
    /// assert_eq!(map.remove_max(), None);
    /// ```
    pub fn remove_max(&mut self) -> Option<(T, U)> {
        if self.tree.is_none() {
            debug!("remove_max called on an empty map");
            return None;
        }

        tree::fix_root(&mut self.tree);
        let node = tree::remove_max(&mut self.tree);
        tree::blacken_root(&mut self.tree);
        Some(node.entry.into_pair())
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::size(&self.tree)
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        trace!("clearing map with {} entries", self.len());
        self.tree = None;
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the key with exactly `rank` smaller keys in the map. Returns `None` if `rank` is
    /// not less than the length of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.select(0), Some(&1));
    /// assert_eq!(map.select(1), Some(&3));
    /// assert_eq!(map.select(2), None);
    /// ```
    pub fn select(&self, rank: usize) -> Option<&T> {
        tree::select(&self.tree, rank).map(|entry| &entry.key)
    }

    /// Returns the number of keys in the map that are strictly less than a particular key. The key
    /// does not need to exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.rank(&0), 0);
    /// assert_eq!(map.rank(&3), 1);
    /// assert_eq!(map.rank(&4), 2);
    /// ```
    pub fn rank<V>(&self, key: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::rank(&self.tree, key)
    }

    /// Returns the number of keys in the map that are in the inclusive range `[low, high]`.
    /// Returns `0` if `low` is greater than `high`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// map.insert(5, 5);
    /// assert_eq!(map.size_in_range(&1, &3), 2);
    /// assert_eq!(map.size_in_range(&2, &4), 1);
    /// assert_eq!(map.size_in_range(&4, &2), 0);
    /// ```
    pub fn size_in_range<V>(&self, low: &V, high: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        if low > high {
            return 0;
        }

        let ret = self.rank(high) - self.rank(low);
        if self.contains_key(high) {
            ret + 1
        } else {
            ret
        }
    }

    /// Returns the height of the map, which is the number of links on the longest path from the
    /// root to a node. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.height(), None);
    /// map.insert(1, 1);
    /// assert_eq!(map.height(), Some(0));
    /// map.insert(2, 2);
    /// assert_eq!(map.height(), Some(1));
    /// ```
    pub fn height(&self) -> Option<usize> {
        tree::height(&self.tree)
    }

    /// Returns a uniformly random key-value pair of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(0);
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.random(&mut rng), None);
    /// map.insert(1, 1);
    /// assert_eq!(map.random(&mut rng), Some((&1, &1)));
    /// ```
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<(&T, &U)> {
        if self.is_empty() {
            return None;
        }

        let rank = rng.gen_range(0..self.len());
        tree::select(&self.tree, rank).map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the keys of the map in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(3, 3);
    /// map.insert(1, 1);
    /// assert_eq!(map.keys(), vec![&1, &3]);
    /// ```
    pub fn keys(&self) -> Vec<&T> {
        let mut entries = Vec::with_capacity(self.len());
        tree::in_order(&self.tree, &mut entries);
        entries.into_iter().map(|entry| &entry.key).collect()
    }

    /// Returns the keys of the map that are in the inclusive range `[low, high]` in ascending
    /// order. Subtrees that lie outside of the range are never visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..10u32 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.keys_in_range(&3, &5), vec![&3, &4, &5]);
    /// assert_eq!(map.keys_in_range(&5, &3), Vec::<&u32>::new());
    /// ```
    pub fn keys_in_range<V>(&self, low: &V, high: &V) -> Vec<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut entries = Vec::new();
        tree::range(&self.tree, low, high, &mut entries);
        entries.into_iter().map(|entry| &entry.key).collect()
    }

    /// Returns the keys of the map in level order, from the root down.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.insert(3, 3);
    /// assert_eq!(map.keys_level_order(), vec![&2, &1, &3]);
    /// ```
    pub fn keys_level_order(&self) -> Vec<&T> {
        tree::level_order(&self.tree)
            .into_iter()
            .map(|entry| &entry.key)
            .collect()
    }

    /// Returns the keys of the map using pre-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.insert(3, 3);
    /// assert_eq!(map.keys_pre_order(), vec![&2, &1, &3]);
    /// ```
    pub fn keys_pre_order(&self) -> Vec<&T> {
        let mut entries = Vec::with_capacity(self.len());
        tree::pre_order(&self.tree, &mut entries);
        entries.into_iter().map(|entry| &entry.key).collect()
    }

    /// Returns the keys of the map using post-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.insert(3, 3);
    /// assert_eq!(map.keys_post_order(), vec![&1, &3, &2]);
    /// ```
    pub fn keys_post_order(&self) -> Vec<&T> {
        let mut entries = Vec::with_capacity(self.len());
        tree::post_order(&self.tree, &mut entries);
        entries.into_iter().map(|entry| &entry.key).collect()
    }

    /// Returns all key-value pairs of the map in ascending order of keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, "two");
    /// map.insert(1, "one");
    /// assert_eq!(map.entries(), vec![(&1, &"one"), (&2, &"two")]);
    /// ```
    pub fn entries(&self) -> Vec<(&T, &U)> {
        let mut entries = Vec::with_capacity(self.len());
        tree::in_order(&self.tree, &mut entries);
        entries
            .into_iter()
            .map(|entry| (&entry.key, &entry.value))
            .collect()
    }

    /// Checks every invariant of the underlying tree: the ordering of keys, the color of links,
    /// the black balance and the subtree sizes. Returns statistics about the tree if it is valid
    /// and the first violation found otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.insert(3, 3);
    ///
    /// let stats = map.validate().unwrap();
    /// assert_eq!(stats.len, 3);
    /// assert_eq!(stats.black_height, 2);
    /// assert_eq!(stats.height, Some(1));
    /// ```
    pub fn validate(&self) -> Result<TreeStats>
    where
        T: Ord,
    {
        let black_height = tree::validate(&self.tree).map_err(|err| {
            debug!("invalid red black tree: {}", err);
            err
        })?;

        Ok(TreeStats {
            len: self.len(),
            black_height,
            height: self.height(),
        })
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal. The traversal is lazy: each call to `next` only descends as far as needed to
    /// find the next pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, T, U> {
        RedBlackMapIter {
            current: &self.tree,
            stack: Vec::new(),
            remaining: self.len(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> RedBlackMapIterMut<'_, T, U> {
        RedBlackMapIterMut {
            current: self.tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

impl<T, U> IntoIterator for RedBlackMap<T, U> {
    type IntoIter = RedBlackMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a RedBlackMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut RedBlackMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct RedBlackMapIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for RedBlackMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = node;
            self.current = right;
            entry.into_pair()
        })
    }
}

/// An iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct RedBlackMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: &'a tree::Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
    remaining: usize,
}

impl<'a, T, U> Iterator for RedBlackMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { ref key, ref value },
                ref right,
                ..
            } = node;
            self.current = right;
            self.remaining -= 1;
            (key, value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, U> ExactSizeIterator for RedBlackMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
}

type BorrowedIterEntryMut<'a, T, U> = Option<(&'a mut Entry<T, U>, BorrowedTreeMut<'a, T, U>)>;
type BorrowedTreeMut<'a, T, U> = Option<&'a mut Node<T, U>>;

/// A mutable iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable references.
pub struct RedBlackMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: Option<&'a mut Node<T, U>>,
    stack: Vec<BorrowedIterEntryMut<'a, T, U>>,
}

impl<'a, T, U> Iterator for RedBlackMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        let RedBlackMapIterMut {
            ref mut current,
            ref mut stack,
        } = self;
        while current.is_some() {
            stack.push(current.take().map(|node| {
                *current = node.left.as_mut().map(|node| &mut **node);
                (&mut node.entry, node.right.as_mut().map(|node| &mut **node))
            }));
        }
        stack.pop().and_then(|pair_opt| {
            match pair_opt {
                Some(pair) => {
                    let (entry, right) = pair;
                    let Entry {
                        ref key,
                        ref mut value,
                    } = entry;
                    *current = right;
                    Some((key, value))
                },
                None => None,
            }
        })
    }
}

impl<T, U> Default for RedBlackMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> FromIterator<(T, U)> for RedBlackMap<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = RedBlackMap::new();
        map.extend(iter);
        map
    }
}

impl<T, U> Extend<(T, U)> for RedBlackMap<T, U>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, T, U, V> Index<&'a V> for RedBlackMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for RedBlackMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackMap;

    #[test]
    fn test_len_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get(&1), None);
        assert_eq!(map.height(), None);
    }

    #[test]
    fn test_min_max_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_replace() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert_eq!(map.insert(1, 3), Some((1, 1)));
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_insert_in_shuffled_order() {
        let mut map = RedBlackMap::new();
        let keys = [5, 3, 1, 6, 4, 2];
        let values = ["five", "three", "one", "six", "four", "two"];
        for (key, value) in keys.iter().zip(values.iter()) {
            map.insert(*key, *value);
        }

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &&str)>>(),
            vec![
                (&1, &"one"),
                (&2, &"two"),
                (&3, &"three"),
                (&4, &"four"),
                (&5, &"five"),
                (&6, &"six"),
            ],
        );
        assert!(map.validate().is_ok());
    }

    #[test]
    fn test_remove() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert!(!map.contains_key(&1));
        assert!(map.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        assert_eq!(map.remove(&2), None);
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys(), vec![&1, &3]);
        assert!(map.validate().is_ok());
    }

    #[test]
    fn test_remove_node_with_two_children() {
        let mut map = RedBlackMap::new();
        for key in &[4, 2, 6, 1, 3, 5, 7] {
            map.insert(*key, *key * 10);
        }

        assert_eq!(map.remove(&4), Some((4, 40)));
        assert_eq!(map.keys(), vec![&1, &2, &3, &5, &6, &7]);
        assert_eq!(map.get(&5), Some(&50));
        assert!(map.validate().is_ok());

        assert_eq!(map.remove(&2), Some((2, 20)));
        assert_eq!(map.keys(), vec![&1, &3, &5, &6, &7]);
        assert!(map.validate().is_ok());
    }

    #[test]
    fn test_remove_min_max() {
        let mut map = RedBlackMap::new();
        for key in 0..10 {
            map.insert(key, key);
        }

        assert_eq!(map.remove_min(), Some((0, 0)));
        assert_eq!(map.remove_max(), Some((9, 9)));
        assert_eq!(map.len(), 8);
        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&8));
        assert!(map.validate().is_ok());
    }

    #[test]
    fn test_remove_min_max_empty() {
        let mut map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.remove_min(), None);
        assert_eq!(map.remove_max(), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&5));
    }

    #[test]
    fn test_get_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_get_borrowed() {
        let mut map = RedBlackMap::new();
        map.insert(String::from("a"), 1);
        map.insert(String::from("b"), 2);
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.rank("b"), 1);
        assert_eq!(map.remove("a"), Some((String::from("a"), 1)));
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.floor(&0), None);
        assert_eq!(map.floor(&2), Some(&1));
        assert_eq!(map.floor(&4), Some(&3));
        assert_eq!(map.floor(&6), Some(&5));

        assert_eq!(map.ceil(&0), Some(&1));
        assert_eq!(map.ceil(&2), Some(&3));
        assert_eq!(map.ceil(&4), Some(&5));
        assert_eq!(map.ceil(&6), None);
    }

    #[test]
    fn test_rank_select() {
        let mut map = RedBlackMap::new();
        for key in (0..20).rev() {
            map.insert(key * 2, key);
        }

        for rank in 0..20 {
            let key = map.select(rank).cloned();
            assert_eq!(key, Some(rank * 2));
            assert_eq!(map.rank(&(rank * 2)), rank);
            assert_eq!(map.rank(&(rank * 2 + 1)), rank + 1);
        }
        assert_eq!(map.select(20), None);
    }

    #[test]
    fn test_size_in_range() {
        let mut map = RedBlackMap::new();
        for key in 0..10 {
            map.insert(key * 2, key);
        }

        assert_eq!(map.size_in_range(&0, &18), 10);
        assert_eq!(map.size_in_range(&1, &5), 2);
        assert_eq!(map.size_in_range(&3, &3), 0);
        assert_eq!(map.size_in_range(&4, &4), 1);
        assert_eq!(map.size_in_range(&19, &100), 0);
    }

    #[test]
    fn test_traversals() {
        let mut map: RedBlackMap<u32, ()> = RedBlackMap::new();
        for key in 1..8 {
            map.insert(key, ());
        }

        assert_eq!(map.keys(), vec![&1, &2, &3, &4, &5, &6, &7]);
        assert_eq!(map.keys_level_order(), vec![&4, &2, &6, &1, &3, &5, &7]);
        assert_eq!(map.keys_pre_order(), vec![&4, &2, &1, &3, &6, &5, &7]);
        assert_eq!(map.keys_post_order(), vec![&1, &3, &2, &5, &7, &6, &4]);
        assert_eq!(map.keys_in_range(&2, &5), vec![&2, &3, &4, &5]);
        assert_eq!(map.keys_in_range(&8, &9), Vec::<&u32>::new());
    }

    #[test]
    fn test_height() {
        let mut map = RedBlackMap::new();
        for key in 0..1023 {
            map.insert(key, key);
        }
        let height = map.height().unwrap();
        assert!(height >= 9);
        assert!(height <= 2 * 10);
    }

    #[test]
    fn test_validate_stats() {
        let mut map = RedBlackMap::new();
        for key in 1..8 {
            map.insert(key, key);
        }

        let stats = map.validate().unwrap();
        assert_eq!(stats.len, 7);
        assert_eq!(stats.black_height, 3);
        assert_eq!(stats.height, Some(2));
    }

    #[test]
    fn test_validate_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        let stats = map.validate().unwrap();
        assert_eq!(stats.len, 0);
        assert_eq!(stats.black_height, 0);
        assert_eq!(stats.height, None);
    }

    #[test]
    fn test_iter_early_stop() {
        let mut map = RedBlackMap::new();
        for key in 0..100 {
            map.insert(key, key);
        }

        let mut iterator = map.iter();
        assert_eq!(iterator.len(), 100);
        assert_eq!(
            iterator.by_ref().take(3).collect::<Vec<(&u32, &u32)>>(),
            vec![(&0, &0), (&1, &1), (&2, &2)],
        );
        assert_eq!(iterator.len(), 97);
        assert_eq!(iterator.next(), Some((&3, &3)));
    }

    #[test]
    fn test_into_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }

    #[test]
    fn test_iter_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        for (_, value) in &mut map {
            *value += 1;
        }

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &3), (&3, &5), (&5, &7)],
        );
    }

    #[test]
    fn test_from_iter() {
        let map: RedBlackMap<u32, u32> = vec![(3, 1), (1, 2), (3, 3)].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.entries(), vec![(&1, &2), (&3, &3)]);
    }

    #[test]
    #[should_panic(expected = "Error: key does not exist.")]
    fn test_index_missing() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        let _value: u32 = map[&1];
    }
}
