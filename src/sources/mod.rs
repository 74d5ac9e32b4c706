// Review source adapters; each one implements ReviewSourcePort

pub mod fixture;
pub mod google_business;

pub use fixture::FixtureSource;
pub use google_business::GoogleBusinessSource;
