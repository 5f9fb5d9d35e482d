//! Board storage for the unbounded grid.

pub mod store;

pub use store::BoardStore;
