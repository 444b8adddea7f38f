//! Indexed binary min-heap
//!
//! A heap of node ids ordered by an external priority slice, paired with
//! an inverse (node id -> heap slot) array. The inverse map gives O(log n)
//! decrease-key without scanning, which the tunnel router depends on.
//! Priorities live in the caller's distances array; nothing is duplicated
//! here. Removal is logical: the root is swapped to the vacated end slot
//! and `len` shrinks.

/// Min-heap over external priorities with an inverse slot map
#[derive(Debug, Clone)]
pub struct IndexedHeap {
    /// Permutation of node ids; slots `0..len` are the active frontier
    heap: Vec<usize>,
    /// Inverse permutation: `coheap[heap[i]] == i`
    coheap: Vec<usize>,
    /// Active frontier size
    len: usize,
}

impl IndexedHeap {
    /// Create a heap over `n` nodes, all active
    pub fn new(n: usize) -> Self {
        let mut h = Self {
            heap: Vec::new(),
            coheap: Vec::new(),
            len: 0,
        };
        h.reset(n);
        h
    }

    /// Reset to the identity permutation with all `n` nodes active.
    ///
    /// Valid as a heap only while all priorities are equal (the router
    /// resets distances to infinity first, then decreases its starts).
    pub fn reset(&mut self, n: usize) {
        self.heap.clear();
        self.heap.extend(0..n);
        self.coheap.clear();
        self.coheap.extend(0..n);
        self.len = n;
    }

    /// Active frontier size
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Exchange two heap slots, keeping the inverse map in sync
    fn coswap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.coheap[self.heap[i]] = i;
        self.coheap[self.heap[j]] = j;
    }

    /// Sift a slot toward the root while its parent's priority is larger
    fn heap_up(&mut self, values: &[f64], mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if values[self.heap[parent]] <= values[self.heap[slot]] {
                break;
            }
            self.coswap(parent, slot);
            slot = parent;
        }
    }

    /// Sift a slot down toward its smaller child, within the active frontier
    fn heap_down(&mut self, values: &[f64], mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < self.len && values[self.heap[left]] < values[self.heap[smallest]] {
                smallest = left;
            }
            if right < self.len && values[self.heap[right]] < values[self.heap[smallest]] {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.coswap(slot, smallest);
            slot = smallest;
        }
    }

    /// Remove and return the node with the smallest priority
    pub fn pop_min(&mut self, values: &[f64]) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let top = self.heap[0];
        self.len -= 1;
        if self.len > 0 {
            self.coswap(0, self.len);
            self.heap_down(values, 0);
        }
        Some(top)
    }

    /// Restore order after `values[node]` decreased. Settled (popped)
    /// nodes are ignored.
    pub fn decrease(&mut self, values: &[f64], node: usize) {
        let slot = self.coheap[node];
        if slot < self.len {
            self.heap_up(values, slot);
        }
    }
}
