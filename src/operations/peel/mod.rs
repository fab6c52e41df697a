mod engine;
mod layers;
mod oracle;
mod params;
mod peel_layers;
mod residual;
mod validate;

pub use engine::peel_outer_hull_layers;
pub use layers::PeelLayers;
pub use oracle::{HullFace, HullSelection, OuterHullOracle};
pub use params::PeelParams;
pub use peel_layers::PeelOuterHullLayers;
