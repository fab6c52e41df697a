pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;

pub use error::{ContractError, HullError, MeshError, PeelError, Result};
pub use mesh::TriangleSoup;
pub use operations::peel::{
    peel_outer_hull_layers, HullFace, HullSelection, OuterHullOracle, PeelLayers,
    PeelOuterHullLayers, PeelParams,
};
