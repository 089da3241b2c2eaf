//! Storage implementations for the bills store and the session

pub mod fixtures;
pub mod in_memory;
pub mod mock;

pub use in_memory::InMemorySessionStorage;
pub use mock::{ListFn, MockStore};
