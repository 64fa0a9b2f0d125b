use crate::entry::Entry;
use crate::error::{RedBlackError, Result};
use crate::red_black_tree::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::collections::VecDeque;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn is_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

// Checks the color of the left child of the root of `tree`.
pub fn is_left_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => is_red(&node.left),
    }
}

pub fn size<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.size,
    }
}

// Colors the root red if both of its children are black so that there is always a red link to
// push down during a removal.
pub fn fix_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

pub fn blacken_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let ret = match tree {
        Some(ref mut node) => {
            match new_node.entry.key.cmp(&node.entry.key) {
                Ordering::Less => insert(&mut node.left, new_node),
                Ordering::Greater => insert(&mut node.right, new_node),
                Ordering::Equal => return Some(mem::replace(&mut node.entry, new_node.entry)),
            }
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    let node = tree.as_mut().expect("Expected non-empty tree.");

    if is_red(&node.right) && !is_red(&node.left) {
        node.rotate_left();
    }

    if is_red(&node.left) && is_left_red(&node.left) {
        node.rotate_right();
    }

    if is_red(&node.left) && is_red(&node.right) {
        node.flip_colors();
    }

    node.update();
    ret
}

// precondition: `tree` is not empty
pub fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            if !is_red(&node.left) && !is_left_red(&node.left) {
                node.move_red_left();
            }

            let ret = remove_min(&mut node.left);
            node.balance();
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

// precondition: `tree` is not empty
pub fn remove_max<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    if let Some(ref mut node) = tree {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if node.right.is_some() {
            if !is_red(&node.right) && !is_left_red(&node.right) {
                node.move_red_right();
            }

            let ret = remove_max(&mut node.right);
            node.balance();
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.left.take();
    node
}

// precondition: `key` exists in `tree`
pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut node = tree.take()?;

    let ret = if key < node.entry.key.borrow() {
        if !is_red(&node.left) && !is_left_red(&node.left) {
            node.move_red_left();
        }

        remove(&mut node.left, key)
    } else {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if key == node.entry.key.borrow() && node.right.is_none() {
            debug_assert!(node.left.is_none());
            return Some(node.entry);
        }

        if !is_red(&node.right) && !is_left_red(&node.right) {
            node.move_red_right();
        }

        if key == node.entry.key.borrow() {
            let successor = remove_min(&mut node.right);
            Some(mem::replace(&mut node.entry, successor.entry))
        } else {
            remove(&mut node.right, key)
        }
    };

    node.balance();
    *tree = Some(node);
    ret
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn ceil<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn floor<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

pub fn select<T, U>(tree: &Tree<T, U>, rank: usize) -> Option<&Entry<T, U>> {
    tree.as_ref().and_then(|node| {
        let left_size = size(&node.left);
        match left_size.cmp(&rank) {
            Ordering::Greater => select(&node.left, rank),
            Ordering::Less => select(&node.right, rank - left_size - 1),
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn rank<T, U, V>(tree: &Tree<T, U>, key: &V) -> usize
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    let mut ret = 0;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                ret += 1 + size(&node.left);
                curr = &node.right;
            },
            Ordering::Equal => return ret + size(&node.left),
        }
    }
    ret
}

pub fn height<T, U>(tree: &Tree<T, U>) -> Option<usize> {
    tree.as_ref().map(|node| {
        cmp::max(height(&node.left), height(&node.right)).map_or(0, |child_height| child_height + 1)
    })
}

pub fn in_order<'a, T, U>(tree: &'a Tree<T, U>, entries: &mut Vec<&'a Entry<T, U>>) {
    if let Some(ref node) = tree {
        in_order(&node.left, entries);
        entries.push(&node.entry);
        in_order(&node.right, entries);
    }
}

pub fn pre_order<'a, T, U>(tree: &'a Tree<T, U>, entries: &mut Vec<&'a Entry<T, U>>) {
    if let Some(ref node) = tree {
        entries.push(&node.entry);
        pre_order(&node.left, entries);
        pre_order(&node.right, entries);
    }
}

pub fn post_order<'a, T, U>(tree: &'a Tree<T, U>, entries: &mut Vec<&'a Entry<T, U>>) {
    if let Some(ref node) = tree {
        post_order(&node.left, entries);
        post_order(&node.right, entries);
        entries.push(&node.entry);
    }
}

pub fn level_order<T, U>(tree: &Tree<T, U>) -> Vec<&Entry<T, U>> {
    let mut entries = Vec::with_capacity(size(tree));
    let mut queue = VecDeque::new();
    if let Some(ref node) = tree {
        queue.push_back(node);
    }
    while let Some(node) = queue.pop_front() {
        entries.push(&node.entry);
        if let Some(ref left_node) = node.left {
            queue.push_back(left_node);
        }
        if let Some(ref right_node) = node.right {
            queue.push_back(right_node);
        }
    }
    entries
}

// Collects the entries with keys in `[low, high]`, skipping subtrees that lie outside the range.
pub fn range<'a, T, U, V>(
    tree: &'a Tree<T, U>,
    low: &V,
    high: &V,
    entries: &mut Vec<&'a Entry<T, U>>,
) where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    if let Some(ref node) = tree {
        let key: &V = node.entry.key.borrow();
        if low < key {
            range(&node.left, low, high, entries);
        }
        if low <= key && key <= high {
            entries.push(&node.entry);
        }
        if key < high {
            range(&node.right, low, high, entries);
        }
    }
}

// Returns the black height of `tree`. `offset` is the in-order rank of the leftmost node of
// `tree` and is only used to locate violations.
fn check_links<T, U>(tree: &Tree<T, U>, offset: usize) -> Result<usize> {
    let node = match tree {
        None => return Ok(0),
        Some(ref node) => node,
    };
    let rank = offset + size(&node.left);

    if is_red(&node.right) {
        return Err(RedBlackError::RightLeaningRed { rank });
    }
    if node.color == Color::Red && is_red(&node.left) {
        return Err(RedBlackError::ConsecutiveReds { rank });
    }

    let expected = 1 + size(&node.left) + size(&node.right);
    if node.size != expected {
        return Err(RedBlackError::SizeMismatch {
            expected,
            actual: node.size,
        });
    }

    let left = check_links(&node.left, offset)?;
    let right = check_links(&node.right, rank + 1)?;
    if left != right {
        return Err(RedBlackError::UnbalancedBlacks { left, right });
    }

    match node.color {
        Color::Black => Ok(left + 1),
        Color::Red => Ok(left),
    }
}

// Checks every invariant of `tree` and returns its black height.
pub fn validate<T, U>(tree: &Tree<T, U>) -> Result<usize>
where
    T: Ord,
{
    if is_red(tree) {
        return Err(RedBlackError::RedRoot);
    }

    let black_height = check_links(tree, 0)?;

    let mut entries = Vec::with_capacity(size(tree));
    in_order(tree, &mut entries);
    for (rank, pair) in entries.windows(2).enumerate() {
        if pair[0].key >= pair[1].key {
            return Err(RedBlackError::UnsortedKeys { rank: rank + 1 });
        }
    }

    Ok(black_height)
}
