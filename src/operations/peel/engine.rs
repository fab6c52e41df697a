use nalgebra::Scalar;
use tracing::{debug, info, info_span};

use crate::error::Result;
use crate::mesh::TriangleSoup;

use super::layers::{LayerAssignment, PeelLayers};
use super::oracle::OuterHullOracle;
use super::params::PeelParams;
use super::residual::ResidualFaces;
use super::validate::consumed_mask;

/// Peels a triangle soup into outer hull layers.
///
/// Repeatedly asks `oracle` for the outer hull of the faces that are still
/// unassigned, gives those faces the current layer index and their flip flag,
/// and drops them from the residual. Stops when no faces remain, so the
/// oracle is called exactly once per layer and never with an empty subset.
///
/// # Errors
///
/// Returns an error if the oracle fails, or if it breaks its contract by
/// returning an empty hull, an out-of-range position, or a repeated
/// position. No partial result is returned.
pub fn peel_outer_hull_layers<S, O>(
    soup: &TriangleSoup<S>,
    oracle: &mut O,
    params: PeelParams,
) -> Result<PeelLayers>
where
    S: Scalar,
    O: OuterHullOracle<S> + ?Sized,
{
    let face_count = soup.face_count();
    let span = info_span!(
        "peel_outer_hull_layers",
        faces = face_count,
        vertices = soup.vertex_count()
    );
    let _guard = span.enter();

    let mut residual = ResidualFaces::from_faces(soup.faces());
    let mut assignment = LayerAssignment::new(face_count, params.verify_write_once);
    let mut layer = 0;

    while !residual.is_empty() {
        let selection = oracle.outer_hull(soup.vertices(), residual.faces())?;
        let consumed = consumed_mask(&selection, residual.len(), layer)?;

        for hull_face in &selection {
            let face = residual.original_index(hull_face.local);
            assignment.assign(face, layer, hull_face.flipped)?;
        }

        let next = residual.without(&consumed);
        debug!(
            layer,
            peeled = selection.len(),
            remaining = next.len(),
            "peeled outer hull layer"
        );
        residual = next;
        layer += 1;
    }

    let layers = assignment.finish(layer)?;
    info!(layers = layer, faces = face_count, "outer hull peeling complete");
    Ok(layers)
}
