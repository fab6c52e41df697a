use thiserror::Error;

/// Top-level error type for outer hull layer peeling.
#[derive(Debug, Error)]
pub enum PeelError {
    #[error(transparent)]
    Hull(#[from] HullError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors reported by an outer hull oracle on its own terms.
#[derive(Debug, Error)]
pub enum HullError {
    #[error("outer hull computation failed: {0}")]
    Failed(String),
}

/// Violations of the invariants the peeling loop depends on.
///
/// These are fatal: the loop's termination and the face index bijection
/// both rely on them, so peeling aborts instead of recovering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContractError {
    #[error("outer hull of {residual} remaining faces is empty (layer {layer})")]
    EmptyHull { layer: usize, residual: usize },

    #[error("hull face index {index} is out of range [0, {residual}) (layer {layer})")]
    IndexOutOfRange {
        layer: usize,
        index: usize,
        residual: usize,
    },

    #[error("hull face index {index} selected more than once (layer {layer})")]
    DuplicateIndex { layer: usize, index: usize },

    #[error("{indices} hull face indices but {flips} flip flags")]
    FlipCountMismatch { indices: usize, flips: usize },

    #[error("face {face} already assigned to layer {previous}, reassigned in layer {layer}")]
    AlreadyAssigned {
        face: usize,
        previous: usize,
        layer: usize,
    },

    #[error("face {face} was never assigned a layer")]
    Unassigned { face: usize },
}

/// Errors related to face lists handed to mesh helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("face index {index} offset by {offset} does not fit in u32")]
    IndexOverflow { index: u32, offset: usize },

    #[error("expected {expected} faces, got {actual}")]
    FaceCountMismatch { expected: usize, actual: usize },
}

/// Convenience type alias for results using [`PeelError`].
pub type Result<T> = std::result::Result<T, PeelError>;
