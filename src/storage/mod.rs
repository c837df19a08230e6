//! Storage implementations for suppliers

pub mod in_memory;

pub use in_memory::InMemorySupplierStore;
