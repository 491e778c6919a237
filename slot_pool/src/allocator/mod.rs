pub mod config;
pub mod slot_allocator;

pub use config::{SlotAllocatorConfig, GrowthPolicy, ReleaseCheck, DEFAULT_CAPACITY};
pub use slot_allocator::{SlotAllocator, SlotAllocatorStats, FreeIndices};
