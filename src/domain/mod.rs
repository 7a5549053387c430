// Domain layer: species/coordinate models, selection policy and ports.
// Only std, serde and chrono are used here.

pub mod model;
pub mod policy;
pub mod ports;
