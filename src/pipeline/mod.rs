// Data processing pipeline: normalization, validation, and storage

pub mod processing;
pub mod storage;
