use crate::error::{ContractError, MeshError};
use crate::math::{reverse_winding, Triangle};

/// Per-face layer and flip results, filled in as layers are peeled.
///
/// Every face starts unassigned. [`LayerAssignment::finish`] only succeeds
/// once each face has been given a layer.
#[derive(Debug)]
pub(crate) struct LayerAssignment {
    layers: Vec<Option<usize>>,
    flips: Vec<bool>,
    verify_write_once: bool,
}

impl LayerAssignment {
    pub(crate) fn new(face_count: usize, verify_write_once: bool) -> Self {
        Self {
            layers: vec![None; face_count],
            flips: vec![false; face_count],
            verify_write_once,
        }
    }

    /// Records that original face `face` was peeled in `layer`.
    pub(crate) fn assign(
        &mut self,
        face: usize,
        layer: usize,
        flipped: bool,
    ) -> Result<(), ContractError> {
        let slot = &mut self.layers[face];
        if self.verify_write_once {
            if let Some(previous) = *slot {
                return Err(ContractError::AlreadyAssigned {
                    face,
                    previous,
                    layer,
                });
            }
        }
        *slot = Some(layer);
        self.flips[face] = flipped;
        Ok(())
    }

    /// Consumes the accumulator once all `layer_count` layers are peeled.
    pub(crate) fn finish(self, layer_count: usize) -> Result<PeelLayers, ContractError> {
        let layers = self
            .layers
            .into_iter()
            .enumerate()
            .map(|(face, layer)| layer.ok_or(ContractError::Unassigned { face }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PeelLayers {
            layers,
            flips: self.flips,
            layer_count,
        })
    }
}

/// The result of peeling a triangle soup into outer hull layers.
///
/// Layer 0 is the outermost shell. Faces are addressed by their index in the
/// original face list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeelLayers {
    layers: Vec<usize>,
    flips: Vec<bool>,
    layer_count: usize,
}

impl PeelLayers {
    /// Layer index of every face.
    #[must_use]
    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    /// Whether each face was flipped in the hull it was peeled from.
    #[must_use]
    pub fn flips(&self) -> &[bool] {
        &self.flips
    }

    /// Number of layers peeled. Zero only for an empty face list.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    #[must_use]
    pub fn layer_of(&self, face: usize) -> Option<usize> {
        self.layers.get(face).copied()
    }

    #[must_use]
    pub fn is_flipped(&self, face: usize) -> Option<bool> {
        self.flips.get(face).copied()
    }

    /// Whether the face sits in an odd layer, i.e. behind an odd number of
    /// shells.
    #[must_use]
    pub fn is_odd_layer(&self, face: usize) -> Option<bool> {
        self.layer_of(face).map(|layer| layer % 2 == 1)
    }

    /// Original indices of the faces peeled in `layer`, ascending.
    #[must_use]
    pub fn faces_in_layer(&self, layer: usize) -> Vec<usize> {
        self.layers
            .iter()
            .enumerate()
            .filter(|(_, &l)| l == layer)
            .map(|(face, _)| face)
            .collect()
    }

    /// Number of faces in each layer, outermost first.
    #[must_use]
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.layer_count];
        for &layer in &self.layers {
            sizes[layer] += 1;
        }
        sizes
    }

    /// Returns `faces` with every flipped face's winding reversed.
    ///
    /// `faces` is the original face list these layers were computed from.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::FaceCountMismatch`] if `faces` is not the same
    /// length as the peeled face list.
    pub fn oriented_faces(&self, faces: &[Triangle]) -> Result<Vec<Triangle>, MeshError> {
        if faces.len() != self.face_count() {
            return Err(MeshError::FaceCountMismatch {
                expected: self.face_count(),
                actual: faces.len(),
            });
        }
        Ok(faces
            .iter()
            .zip(&self.flips)
            .map(|(&tri, &flipped)| if flipped { reverse_winding(tri) } else { tri })
            .collect())
    }

    /// Splits into `(layers, flips, layer_count)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<usize>, Vec<bool>, usize) {
        (self.layers, self.flips, self.layer_count)
    }
}
