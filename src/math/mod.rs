/// 3D point type, generic over the coordinate scalar.
///
/// The scalar is whatever the outer hull oracle needs for its predicates:
/// floats, integers, or an exact rational type.
pub type Point3<S> = nalgebra::Point3<S>;

/// A triangle as three indices into a vertex array.
pub type Triangle = [u32; 3];

/// Returns the triangle with its winding reversed.
///
/// The first vertex is kept so the face stays anchored at the same corner.
#[must_use]
pub fn reverse_winding(tri: Triangle) -> Triangle {
    [tri[0], tri[2], tri[1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_swaps_last_two() {
        assert_eq!(reverse_winding([3, 7, 9]), [3, 9, 7]);
    }

    #[test]
    fn reverse_twice_is_identity() {
        let tri = [0, 1, 2];
        assert_eq!(reverse_winding(reverse_winding(tri)), tri);
    }
}
