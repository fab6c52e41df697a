use nalgebra::Scalar;

use crate::error::{MeshError, Result};
use crate::math::{Point3, Triangle};

/// An indexed triangle set with no connectivity requirements.
///
/// Faces may self-intersect, share edges non-manifoldly, or be degenerate.
/// Vertex indices are not validated here; whoever consumes the geometry
/// (the outer hull oracle) is responsible for that.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleSoup<S: Scalar> {
    vertices: Vec<Point3<S>>,
    faces: Vec<Triangle>,
}

impl<S: Scalar> Default for TriangleSoup<S> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }
}

impl<S: Scalar> TriangleSoup<S> {
    /// Creates a soup from vertex positions and triangles.
    #[must_use]
    pub fn new(vertices: Vec<Point3<S>>, faces: Vec<Triangle>) -> Self {
        Self { vertices, faces }
    }

    /// Vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3<S>] {
        &self.vertices
    }

    /// Triangles, in their original order.
    #[must_use]
    pub fn faces(&self) -> &[Triangle] {
        &self.faces
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns a soup holding this soup's faces followed by `other`'s, with
    /// `other`'s face indices offset past this soup's vertices.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexOverflow`] if an offset index does not fit
    /// in `u32`.
    pub fn merge(&self, other: &Self) -> Result<Self> {
        let len = self.vertices.len();
        let offset = u32::try_from(len).map_err(|_| MeshError::IndexOverflow {
            index: 0,
            offset: len,
        })?;
        let shifted = other
            .faces
            .iter()
            .map(|tri| -> std::result::Result<Triangle, MeshError> {
                let mut out = *tri;
                for (slot, &index) in out.iter_mut().zip(tri) {
                    *slot = index
                        .checked_add(offset)
                        .ok_or(MeshError::IndexOverflow { index, offset: len })?;
                }
                Ok(out)
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut vertices = self.vertices.clone();
        vertices.extend(other.vertices.iter().cloned());
        let mut faces = self.faces.clone();
        faces.extend(shifted);
        Ok(Self { vertices, faces })
    }
}
