// Storage for the review feed; session-scoped and in-memory by design

pub mod in_memory;

pub use in_memory::ReviewFeed;
