use nalgebra::Scalar;

use crate::error::Result;
use crate::mesh::TriangleSoup;

use super::engine::peel_outer_hull_layers;
use super::layers::PeelLayers;
use super::oracle::OuterHullOracle;
use super::params::PeelParams;

/// Assigns every face of a triangle soup to an outer hull layer.
pub struct PeelOuterHullLayers<'a, S: Scalar> {
    soup: &'a TriangleSoup<S>,
    params: PeelParams,
}

impl<'a, S: Scalar> PeelOuterHullLayers<'a, S> {
    /// Creates a new `PeelOuterHullLayers` operation with default parameters.
    #[must_use]
    pub fn new(soup: &'a TriangleSoup<S>) -> Self {
        Self {
            soup,
            params: PeelParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: PeelParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the peel, calling `oracle` once per layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the oracle fails or breaks its contract.
    pub fn execute<O>(&self, oracle: &mut O) -> Result<PeelLayers>
    where
        O: OuterHullOracle<S> + ?Sized,
    {
        peel_outer_hull_layers(self.soup, oracle, self.params)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ContractError, PeelError};
    use crate::math::{Point3, Triangle};
    use crate::operations::peel::{HullFace, HullSelection};

    fn two_faces() -> TriangleSoup<f64> {
        TriangleSoup::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            vec![[0, 1, 2], [0, 1, 3]],
        )
    }

    #[test]
    fn execute_peels_with_boxed_oracle() {
        let soup = two_faces();
        let mut oracle: Box<dyn OuterHullOracle<f64>> =
            Box::new(|_: &[Point3<f64>], faces: &[Triangle]| -> Result<HullSelection> {
                Ok(HullSelection::new(vec![HullFace::new(faces.len() - 1, true)]))
            });
        let layers = PeelOuterHullLayers::new(&soup)
            .execute(&mut *oracle)
            .unwrap();
        assert_eq!(layers.layers(), &[1, 0]);
        assert_eq!(layers.flips(), &[true, true]);
    }

    #[test]
    fn execute_with_params() {
        let soup = two_faces();
        let mut oracle = |_: &[Point3<f64>], faces: &[Triangle]| -> Result<HullSelection> {
            Ok(HullSelection::unflipped(0..faces.len()))
        };
        let layers = PeelOuterHullLayers::new(&soup)
            .with_params(PeelParams::default().with_verify_write_once(true))
            .execute(&mut oracle)
            .unwrap();
        assert_eq!(layers.into_parts(), (vec![0, 0], vec![false, false], 1));
    }

    #[test]
    fn contract_errors_surface_through_execute() {
        let soup = two_faces();
        let mut oracle = |_: &[Point3<f64>], _: &[Triangle]| -> Result<HullSelection> {
            Ok(HullSelection::default())
        };
        let err = PeelOuterHullLayers::new(&soup)
            .execute(&mut oracle)
            .unwrap_err();
        assert!(matches!(
            err,
            PeelError::Contract(ContractError::EmptyHull { .. })
        ));
    }
}
