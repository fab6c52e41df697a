use nalgebra::Scalar;

use crate::error::{ContractError, Result};
use crate::math::{Point3, Triangle};

/// One face of an outer hull, addressed by its position in the face subset
/// the oracle was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HullFace {
    /// Position in the face subset passed to the oracle.
    pub local: usize,
    /// `true` if the face's winding is reversed in the hull relative to the
    /// subset it came from.
    pub flipped: bool,
}

impl HullFace {
    #[must_use]
    pub fn new(local: usize, flipped: bool) -> Self {
        Self { local, flipped }
    }
}

/// The faces an oracle reports as the outer hull of a face subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HullSelection {
    faces: Vec<HullFace>,
}

impl HullSelection {
    /// Creates a selection from hull faces.
    #[must_use]
    pub fn new(faces: Vec<HullFace>) -> Self {
        Self { faces }
    }

    /// Creates a selection from parallel index and flip arrays.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::FlipCountMismatch`] if the arrays differ in
    /// length.
    pub fn from_parallel(indices: &[usize], flips: &[bool]) -> Result<Self> {
        if indices.len() != flips.len() {
            return Err(ContractError::FlipCountMismatch {
                indices: indices.len(),
                flips: flips.len(),
            }
            .into());
        }
        Ok(indices
            .iter()
            .zip(flips)
            .map(|(&local, &flipped)| HullFace::new(local, flipped))
            .collect())
    }

    /// Creates a selection of unflipped faces.
    #[must_use]
    pub fn unflipped(indices: impl IntoIterator<Item = usize>) -> Self {
        indices
            .into_iter()
            .map(|local| HullFace::new(local, false))
            .collect()
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, HullFace> {
        self.faces.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

impl FromIterator<HullFace> for HullSelection {
    fn from_iter<I: IntoIterator<Item = HullFace>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a HullSelection {
    type Item = &'a HullFace;
    type IntoIter = std::slice::Iter<'a, HullFace>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}

/// Computes the outer hull of a face subset.
///
/// Called once per peeling iteration with the faces that are still
/// unassigned. For a non-empty subset the result must be non-empty, and
/// every position must be unique and in range; the peeling loop checks this
/// and fails with a [`ContractError`] otherwise. The oracle is never called
/// with an empty subset.
pub trait OuterHullOracle<S: Scalar> {
    /// Returns the outer hull faces of `faces`, by position into `faces`.
    ///
    /// # Errors
    ///
    /// Implementations return [`crate::HullError`] if the hull cannot be
    /// computed.
    fn outer_hull(&mut self, vertices: &[Point3<S>], faces: &[Triangle]) -> Result<HullSelection>;
}

impl<S, F> OuterHullOracle<S> for F
where
    S: Scalar,
    F: FnMut(&[Point3<S>], &[Triangle]) -> Result<HullSelection>,
{
    fn outer_hull(&mut self, vertices: &[Point3<S>], faces: &[Triangle]) -> Result<HullSelection> {
        self(vertices, faces)
    }
}
