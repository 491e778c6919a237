/*!
# Slot Pool

Growable slot allocator for plain value elements.

A [`SlotAllocator`](pool::SlotAllocator) owns one contiguous buffer of `T` and
hands out stable `usize` slot indices. Released slots are recycled through a
free list embedded in a parallel index array, so hot paths (per-frame object
pools, particle systems, transient GPU instance data) acquire and release
elements in O(1) without touching the heap. The buffer only grows when every
slot is taken.

## Architecture

- **SlotAllocator**: the pool (storage, free list, growth)
- **SlotAllocatorConfig**: initial capacity, `GrowthPolicy`, `ReleaseCheck`
- **Error**: `InvalidArgument`, `IndexOutOfRange`, `InvalidState`
- **Diagnostics**: process-wide logger used by every pool

Pools are single-owner and not synchronized; wrap one in a mutex to share it.
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod allocator;

// Main pool namespace module
pub mod pool {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::diagnostics::Diagnostics;

    // Allocator types
    pub use crate::allocator::{
        SlotAllocator, SlotAllocatorStats, FreeIndices,
        SlotAllocatorConfig, GrowthPolicy, ReleaseCheck, DEFAULT_CAPACITY,
    };

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }
}
