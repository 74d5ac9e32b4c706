// Pipeline processing: record normalization and submission validation

pub mod normalize;
pub mod validate;
