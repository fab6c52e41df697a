use crate::math::Triangle;

/// The faces not yet assigned to a layer, packed densely, together with the
/// original index of each.
///
/// `faces[i]` is a copy of original face `index_map[i]`, and both vectors
/// always have the same length. A residual is never edited in place; each
/// peel builds the next one with [`ResidualFaces::without`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResidualFaces {
    faces: Vec<Triangle>,
    index_map: Vec<usize>,
}

impl ResidualFaces {
    /// The full face set with the identity index map.
    pub(crate) fn from_faces(faces: &[Triangle]) -> Self {
        Self {
            faces: faces.to_vec(),
            index_map: (0..faces.len()).collect(),
        }
    }

    pub(crate) fn faces(&self) -> &[Triangle] {
        &self.faces
    }

    pub(crate) fn len(&self) -> usize {
        self.faces.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Original index of the face at residual position `local`.
    ///
    /// `local` must already be checked against [`ResidualFaces::len`].
    pub(crate) fn original_index(&self, local: usize) -> usize {
        self.index_map[local]
    }

    /// Builds the residual that remains after removing every position set in
    /// `consumed`, keeping the relative order of the survivors.
    ///
    /// `consumed` has one entry per residual position.
    pub(crate) fn without(&self, consumed: &[bool]) -> Self {
        debug_assert_eq!(consumed.len(), self.len());
        let remaining = consumed.iter().filter(|&&c| !c).count();
        let mut faces = Vec::with_capacity(remaining);
        let mut index_map = Vec::with_capacity(remaining);
        for ((tri, &original), _) in self
            .faces
            .iter()
            .zip(&self.index_map)
            .zip(consumed)
            .filter(|(_, &c)| !c)
        {
            faces.push(*tri);
            index_map.push(original);
        }
        Self { faces, index_map }
    }
}
