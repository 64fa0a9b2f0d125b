use crate::entry::Entry;
use crate::red_black_tree::tree;
use std::mem;

/// An enum representing the color of the link from a node to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a red black tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub color: Color,
    pub size: usize,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            size: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        self.size = 1 + tree::size(&self.left) + tree::size(&self.right);
    }

    pub fn flip_colors(&mut self) {
        self.color = self.color.flip();
        if let Some(ref mut child) = self.left {
            child.color = child.color.flip();
        }
        if let Some(ref mut child) = self.right {
            child.color = child.color.flip();
        }
    }

    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        child.update();
        self.left = Some(child);
        self.update();
    }

    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        child.update();
        self.right = Some(child);
        self.update();
    }

    // Restores the local invariants on the way up from a removal.
    pub fn balance(&mut self) {
        if tree::is_red(&self.right) {
            self.rotate_left();
        }

        if tree::is_red(&self.left) && tree::is_left_red(&self.left) {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }

        self.update();
    }

    // Makes the left child or one of its children red before descending left.
    pub fn move_red_left(&mut self) {
        self.flip_colors();
        if tree::is_left_red(&self.right) {
            if let Some(ref mut child) = self.right {
                child.rotate_right();
            }
            self.rotate_left();
            self.flip_colors();
        }
    }

    // Makes the right child or one of its children red before descending right.
    pub fn move_red_right(&mut self) {
        self.flip_colors();
        if tree::is_left_red(&self.left) {
            self.rotate_right();
            self.flip_colors();
        }
    }
}
