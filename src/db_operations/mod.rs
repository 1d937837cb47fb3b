// Document-store access layer for the bind registry.

pub mod bind_operations;
pub mod core;

pub use core::DbOperations;
