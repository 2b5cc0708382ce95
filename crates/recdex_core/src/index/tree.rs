//! Unbalanced binary search tree with comparison counting.

use std::cell::Cell;
use std::cmp::Ordering;

type NodeId = usize;

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Location of a child pointer: the root slot or one side of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Root,
    Child(NodeId, Side),
}

/// Key-ordered map backed by a plain binary search tree.
///
/// Nodes live in a dense arena and refer to their children by index. Erased
/// nodes are compacted immediately, so the arena never holds holes. Every
/// traversal is iterative: a degenerate chain (for example from inserting
/// keys in sorted order) is slow but cannot overflow the stack.
///
/// No rebalancing is performed. Lookups cost O(height).
///
/// # Comparison counting
///
/// [`find`](Self::find), [`find_mut`](Self::find_mut),
/// [`contains_key`](Self::contains_key), [`insert`](Self::insert) and the
/// range visitors add one to the counter for every key-ordering comparison
/// they perform. The counter accumulates until
/// [`reset_metrics`](Self::reset_metrics) is called. [`erase`](Self::erase)
/// and the diagnostic walkers do not count.
///
/// # Example
///
/// ```rust
/// use recdex_core::OrderedIndexTree;
///
/// let mut tree = OrderedIndexTree::new();
/// for k in [20, 10, 30] {
///     tree.insert(k, k * 2);
/// }
///
/// tree.reset_metrics();
/// assert_eq!(tree.find(&30), Some(&60));
/// assert_eq!(tree.comparisons(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedIndexTree<K, V> {
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
    comparisons: Cell<u64>,
}

impl<K, V> Default for OrderedIndexTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> OrderedIndexTree<K, V> {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            comparisons: Cell::new(0),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every entry. The comparison counter is left untouched.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Sets the comparison counter to zero.
    pub fn reset_metrics(&self) {
        self.comparisons.set(0);
    }

    /// Returns the comparisons counted since the last reset.
    pub fn comparisons(&self) -> u64 {
        self.comparisons.get()
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.nodes[id];
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
        }
        max
    }

    /// Returns the smallest key.
    pub fn min_key(&self) -> Option<&K> {
        let mut id = self.root?;
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        Some(&self.nodes[id].key)
    }

    /// Returns the largest key.
    pub fn max_key(&self) -> Option<&K> {
        let mut id = self.root?;
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        Some(&self.nodes[id].key)
    }

    /// Returns every entry in ascending key order. Not counted.
    pub fn scan_ordered(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut cur = self.root;
        loop {
            while let Some(id) = cur {
                stack.push(id);
                cur = self.nodes[id].left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            let node = &self.nodes[id];
            out.push((&node.key, &node.value));
            cur = node.right;
        }
        out
    }

    fn tick(&self) {
        self.comparisons.set(self.comparisons.get() + 1);
    }

    fn set_link(&mut self, link: Link, target: Option<NodeId>) {
        match link {
            Link::Root => self.root = target,
            Link::Child(parent, Side::Left) => self.nodes[parent].left = target,
            Link::Child(parent, Side::Right) => self.nodes[parent].right = target,
        }
    }

    fn swap_entries(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(hi);
        let (x, y) = (&mut head[lo], &mut tail[0]);
        std::mem::swap(&mut x.key, &mut y.key);
        std::mem::swap(&mut x.value, &mut y.value);
    }
}

impl<K: Ord, V> OrderedIndexTree<K, V> {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.tick();
        a.cmp(b)
    }

    fn locate(&self, key: &K) -> Option<NodeId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            cur = match self.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Looks up `key`.
    pub fn find(&self, key: &K) -> Option<&V> {
        self.locate(key).map(|id| &self.nodes[id].value)
    }

    /// Looks up `key` and returns its value for in-place mutation.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.locate(key)?;
        Some(&mut self.nodes[id].value)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Inserts `key`, or overwrites its value if it is already present.
    ///
    /// Returns the previous value on overwrite.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut link = Link::Root;
        let mut cur = self.root;
        while let Some(id) = cur {
            let (left, right) = (self.nodes[id].left, self.nodes[id].right);
            match self.compare(&key, &self.nodes[id].key) {
                Ordering::Less => {
                    link = Link::Child(id, Side::Left);
                    cur = left;
                }
                Ordering::Greater => {
                    link = Link::Child(id, Side::Right);
                    cur = right;
                }
                Ordering::Equal => {
                    return Some(std::mem::replace(&mut self.nodes[id].value, value));
                }
            }
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            key,
            value,
            left: None,
            right: None,
        });
        self.set_link(link, Some(id));
        None
    }

    /// Removes `key`. Returns whether an entry was removed.
    pub fn erase(&mut self, key: &K) -> bool {
        let mut link = Link::Root;
        let mut cur = self.root;
        let target = loop {
            let Some(id) = cur else {
                return false;
            };
            let node = &self.nodes[id];
            match key.cmp(&node.key) {
                Ordering::Less => {
                    link = Link::Child(id, Side::Left);
                    cur = node.left;
                }
                Ordering::Greater => {
                    link = Link::Child(id, Side::Right);
                    cur = node.right;
                }
                Ordering::Equal => break id,
            }
        };

        let removed = match (self.nodes[target].left, self.nodes[target].right) {
            (None, child) | (child, None) => {
                self.set_link(link, child);
                target
            }
            (Some(_), Some(right)) => {
                // Pull the in-order successor's entry up into `target`, then
                // unlink the successor node, which has no left child.
                let mut succ_link = Link::Child(target, Side::Right);
                let mut succ = right;
                while let Some(left) = self.nodes[succ].left {
                    succ_link = Link::Child(succ, Side::Left);
                    succ = left;
                }
                let succ_right = self.nodes[succ].right;
                self.set_link(succ_link, succ_right);
                self.swap_entries(target, succ);
                succ
            }
        };

        self.release(removed);
        true
    }

    /// Visits every entry with `lo <= key <= hi` in ascending key order.
    pub fn range_apply<F>(&self, lo: &K, hi: &K, mut visitor: F)
    where
        F: FnMut(&K, &V),
    {
        for id in self.range_ids(lo, hi, |_| false) {
            let node = &self.nodes[id];
            visitor(&node.key, &node.value);
        }
    }

    /// Like [`range_apply`](Self::range_apply), but keeps going past `hi`
    /// for as long as `beyond` accepts the next key.
    ///
    /// Only the first key above `hi` that `beyond` rejects ends the walk, so
    /// `beyond` must describe a run of keys starting at `hi`. Calls to
    /// `beyond` are not counted as comparisons, and once a key above `hi`
    /// has been seen no further comparisons against `hi` are made.
    pub fn range_apply_while<P, F>(&self, lo: &K, hi: &K, beyond: P, mut visitor: F)
    where
        P: FnMut(&K) -> bool,
        F: FnMut(&K, &V),
    {
        for id in self.range_ids(lo, hi, beyond) {
            let node = &self.nodes[id];
            visitor(&node.key, &node.value);
        }
    }

    /// Like [`range_apply`](Self::range_apply), with mutable access to each
    /// value.
    pub fn range_apply_mut<F>(&mut self, lo: &K, hi: &K, mut visitor: F)
    where
        F: FnMut(&K, &mut V),
    {
        for id in self.range_ids(lo, hi, |_| false) {
            let node = &mut self.nodes[id];
            visitor(&node.key, &mut node.value);
        }
    }

    /// Collects the nodes inside `[lo, hi]` in key order, followed by the
    /// nodes above `hi` accepted by `beyond`.
    ///
    /// Nodes below `lo` are skipped together with their left subtrees. Once a
    /// node at or above `lo` is emitted, its right subtree is known to be
    /// above `lo` and is descended without comparing against `lo` again.
    /// Likewise, once `hi` is reached every later node is above it and only
    /// `beyond` is consulted. The walk stops at the first node above `hi`
    /// that `beyond` rejects.
    fn range_ids<P>(&self, lo: &K, hi: &K, mut beyond: P) -> Vec<NodeId>
    where
        P: FnMut(&K) -> bool,
    {
        let mut hits = Vec::new();
        let mut stack = Vec::new();
        let mut cur = self.root;
        let mut check_lo = true;
        let mut past_hi = false;
        loop {
            while let Some(id) = cur {
                let node = &self.nodes[id];
                if !check_lo {
                    stack.push(id);
                    cur = node.left;
                    continue;
                }
                cur = match self.compare(&node.key, lo) {
                    Ordering::Less => node.right,
                    Ordering::Equal => {
                        stack.push(id);
                        None
                    }
                    Ordering::Greater => {
                        stack.push(id);
                        node.left
                    }
                };
            }

            let Some(id) = stack.pop() else {
                break;
            };
            let node = &self.nodes[id];
            let order = if past_hi {
                Ordering::Greater
            } else {
                self.compare(&node.key, hi)
            };
            match order {
                Ordering::Less => {}
                Ordering::Equal => past_hi = true,
                Ordering::Greater => {
                    if !beyond(&node.key) {
                        break;
                    }
                    past_hi = true;
                }
            }
            hits.push(id);
            cur = node.right;
            check_lo = false;
        }
        hits
    }

    /// Drops the unlinked node `id` from the arena.
    ///
    /// The last node is moved into the vacated slot, so the one link that
    /// pointed at it is redirected first.
    fn release(&mut self, id: NodeId) {
        let last = self.nodes.len() - 1;
        if id != last {
            let link = self.link_to(last);
            self.set_link(link, Some(id));
        }
        self.nodes.swap_remove(id);
    }

    /// Finds the link that points at the reachable node `id`. Not counted.
    fn link_to(&self, id: NodeId) -> Link {
        let key = &self.nodes[id].key;
        let mut link = Link::Root;
        let mut cur = self.root;
        while let Some(at) = cur {
            if at == id {
                break;
            }
            let node = &self.nodes[at];
            if *key < node.key {
                link = Link::Child(at, Side::Left);
                cur = node.left;
            } else {
                link = Link::Child(at, Side::Right);
                cur = node.right;
            }
        }
        link
    }
}
