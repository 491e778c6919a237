//! Generic slot allocator with an embedded free list

use std::fmt;
use std::ops::{Index, IndexMut};
use crate::error::{Error, Result};
use crate::{pool_bail, pool_debug};
use super::config::{GrowthPolicy, ReleaseCheck, SlotAllocatorConfig};

/// Free-list terminator
const NIL: usize = usize::MAX;

// ===== STATS =====

/// Snapshot of pool usage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotAllocatorStats {
    /// Occupied slots
    pub count: usize,
    /// Total slots
    pub capacity: usize,
    /// Highest `count` ever reached
    pub peak_count: usize,
    /// Number of times the buffers were reallocated
    pub grow_count: u32,
}

// ===== SLOT ALLOCATOR =====

/// Pool of fixed-size value elements addressed by stable `usize` slots.
///
/// Unused slots are chained in a singly linked free list embedded in a
/// parallel index array, so acquire and release are O(1) and never shift
/// other elements. When the free list runs out, `acquire` grows both
/// buffers according to the pool's `GrowthPolicy`; that is the only point
/// where memory is allocated after construction.
///
/// `acquire` returns the slot index together with a mutable reference to
/// the element. The reference borrows the pool, so it cannot outlive a
/// later growth; the index stays valid until the slot is released.
/// A reacquired slot keeps whatever its previous occupant wrote.
///
/// # Example
///
/// ```ignore
/// let mut pool = SlotAllocator::<u32>::new(2)?;
/// let (a, value) = pool.acquire();   // 0
/// *value = 10;
/// let (b, _) = pool.acquire();       // 1
/// let (c, _) = pool.acquire();       // 2 (pool grew to 3)
/// pool.release(b)?;
/// let (d, _) = pool.acquire();       // 1 (recycled)
/// ```
#[derive(Clone)]
pub struct SlotAllocator<T> {
    storage: Vec<T>,
    /// `free_link[i]`: next free slot after `i`, or NIL. Meaningless for occupied slots.
    free_link: Vec<usize>,
    free_head: usize,
    count: usize,
    /// Per-slot occupied flags, only with `ReleaseCheck::Occupancy`
    occupied: Option<Vec<bool>>,
    growth: GrowthPolicy,
    source: String,
    peak_count: usize,
    grow_count: u32,
}

impl<T: Copy + Default> SlotAllocator<T> {
    /// Create a pool with `capacity` free slots and the default policies
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(SlotAllocatorConfig::with_capacity(capacity))
    }

    /// Create a pool from a full configuration
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `config.initial_capacity` is 0 or
    /// collides with the free-list terminator.
    pub fn with_config(config: SlotAllocatorConfig) -> Result<Self> {
        let source = format!("slot_pool::{}", config.label);
        if config.initial_capacity == 0 {
            pool_bail!(&source, Error::InvalidArgument(
                "Capacity must be at least 1".to_string()
            ));
        }
        if config.initial_capacity >= NIL {
            pool_bail!(&source, Error::InvalidArgument(
                format!("Capacity {} exceeds the addressable slot range", config.initial_capacity)
            ));
        }
        Ok(Self::build(config, source))
    }

    fn build(config: SlotAllocatorConfig, source: String) -> Self {
        let capacity = config.initial_capacity;
        let occupied = match config.release_check {
            ReleaseCheck::CountOnly => None,
            ReleaseCheck::Occupancy => Some(vec![false; capacity]),
        };

        pool_debug!(&source, "Created pool with {} slots", capacity);

        Self {
            storage: vec![T::default(); capacity],
            free_link: chain(0, capacity).collect(),
            free_head: 0,
            count: 0,
            occupied,
            growth: config.growth,
            source,
            peak_count: 0,
            grow_count: 0,
        }
    }

    /// Take a free slot, growing the pool if none is left
    ///
    /// Returns the slot index and mutable access to its element. The element
    /// is not cleared; write every field you rely on.
    pub fn acquire(&mut self) -> (usize, &mut T) {
        let index = self.acquire_index();
        (index, &mut self.storage[index])
    }

    /// Same as [`acquire`](Self::acquire), returning only the slot index
    pub fn acquire_index(&mut self) -> usize {
        if self.free_head == NIL {
            self.grow();
        }

        let index = self.free_head;
        self.free_head = self.free_link[index];
        self.count += 1;
        self.peak_count = self.peak_count.max(self.count);
        if let Some(occupied) = &mut self.occupied {
            occupied[index] = true;
        }
        index
    }

    /// Reallocate both buffers and chain the new slots as the free list
    ///
    /// Only called with an empty free list, so the old head is discarded.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = self.growth.next_capacity(old_capacity);
        debug_assert!(new_capacity > old_capacity);

        self.storage.resize(new_capacity, T::default());
        self.free_link.extend(chain(old_capacity, new_capacity));
        if let Some(occupied) = &mut self.occupied {
            occupied.resize(new_capacity, false);
        }
        self.free_head = old_capacity;
        self.grow_count += 1;

        pool_debug!(&self.source, "Grew pool from {} to {} slots", old_capacity, new_capacity);
    }
}

impl<T> SlotAllocator<T> {
    /// Return a slot to the pool
    ///
    /// With `ReleaseCheck::CountOnly` the slot is not checked for occupancy:
    /// releasing a slot twice or one that was never acquired corrupts the
    /// free list without an error.
    ///
    /// # Errors
    ///
    /// - `Error::IndexOutOfRange` if `index >= capacity`
    /// - `Error::InvalidState` if no slot is occupied, or (with
    ///   `ReleaseCheck::Occupancy`) if this slot is not occupied
    pub fn release(&mut self, index: usize) -> Result<()> {
        let capacity = self.capacity();
        if index >= capacity {
            pool_bail!(&self.source, Error::IndexOutOfRange { index, capacity });
        }
        if self.count == 0 {
            pool_bail!(&self.source, Error::InvalidState(
                "No elements to release".to_string()
            ));
        }
        if let Some(occupied) = &mut self.occupied {
            if !occupied[index] {
                pool_bail!(&self.source, Error::InvalidState(
                    format!("Slot {} is not occupied", index)
                ));
            }
            occupied[index] = false;
        }

        self.free_link[index] = self.free_head;
        self.free_head = index;
        self.count -= 1;
        Ok(())
    }

    /// Number of occupied slots
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total number of slots (occupied + free)
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of free slots
    pub fn free_count(&self) -> usize {
        self.capacity() - self.count
    }

    /// Whether no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether the next acquire will grow the pool
    pub fn is_full(&self) -> bool {
        self.free_head == NIL
    }

    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth
    }

    /// Whether `index` is occupied
    ///
    /// `None` if occupancy is not tracked (`ReleaseCheck::CountOnly`) or
    /// `index` is out of range.
    pub fn is_occupied(&self, index: usize) -> Option<bool> {
        self.occupied.as_ref()?.get(index).copied()
    }

    /// Element at `index`, or `None` if out of range
    ///
    /// Only meaningful for slots the caller currently holds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index)
    }

    /// Mutable element at `index`, or `None` if out of range
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.storage.get_mut(index)
    }

    /// The whole backing storage, free slots included
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage
    }

    /// Free slots in the order the next acquires will hand them out
    pub fn free_indices(&self) -> FreeIndices<'_> {
        FreeIndices {
            links: &self.free_link,
            next: self.free_head,
            remaining: self.free_link.len(),
        }
    }

    pub fn stats(&self) -> SlotAllocatorStats {
        SlotAllocatorStats {
            count: self.count,
            capacity: self.capacity(),
            peak_count: self.peak_count,
            grow_count: self.grow_count,
        }
    }
}

impl<T: bytemuck::Pod> SlotAllocator<T> {
    /// Backing storage as raw bytes (e.g. for a GPU storage buffer upload)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.storage)
    }
}

impl<T: Copy + Default> Default for SlotAllocator<T> {
    fn default() -> Self {
        let config = SlotAllocatorConfig::default();
        let source = format!("slot_pool::{}", config.label);
        Self::build(config, source)
    }
}

impl<T> Index<usize> for SlotAllocator<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.storage[index]
    }
}

impl<T> IndexMut<usize> for SlotAllocator<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.storage[index]
    }
}

impl<T> fmt::Debug for SlotAllocator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotAllocator")
            .field("source", &self.source)
            .field("count", &self.count)
            .field("capacity", &self.capacity())
            .field("growth", &self.growth)
            .finish()
    }
}

// ===== FREE LIST =====

/// Identity chain `start -> start+1 -> ... -> end-1 -> NIL`
fn chain(start: usize, end: usize) -> impl Iterator<Item = usize> {
    (start + 1..=end).map(move |next| if next == end { NIL } else { next })
}

/// Iterator over the free list, see [`SlotAllocator::free_indices`]
///
/// Yields at most `capacity` indices, even if a double release created a cycle.
pub struct FreeIndices<'a> {
    links: &'a [usize],
    next: usize,
    remaining: usize,
}

impl Iterator for FreeIndices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next == NIL || self.remaining == 0 {
            return None;
        }
        let index = self.next;
        self.next = self.links[index];
        self.remaining -= 1;
        Some(index)
    }
}

#[cfg(test)]
#[path = "slot_allocator_tests.rs"]
mod tests;
