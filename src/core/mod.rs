pub mod catalog;
pub mod engine;
pub mod reference_data;
pub mod resolver;
pub mod sampler;
