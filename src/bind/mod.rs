// Bind domain layer: record type, collaborator seams, and the manager.

pub mod lookup;
pub mod manager;
pub mod types;

pub use lookup::{ConsumerLookup, DistributorLookup};
pub use manager::BindManager;
pub use types::Bind;
