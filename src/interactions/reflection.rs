use crate::models::Vector2D;
use crate::utils::PhysicsError;

/// Reflects `v` about a surface with normal `n`.
///
/// Computes `v - 2 (v·n̂) n̂` with `n̂ = n / |n|`, so `n` may have any non-zero length.
/// The result has the same magnitude as `v`.
///
/// # Errors
/// Returns `PhysicsError::DivisionByZero` if `n` has zero length.
///
/// # Example
/// ```
/// use rs_rocket_physics::interactions::reflect;
/// use rs_rocket_physics::models::Vector2D;
///
/// let bounced = reflect(Vector2D::new(-2.0, 1.0), Vector2D::new(4.0, 0.0)).unwrap();
/// assert_eq!(bounced, Vector2D::new(2.0, 1.0));
/// ```
pub fn reflect(v: Vector2D, n: Vector2D) -> Result<Vector2D, PhysicsError> {
    let unit_normal = n.normalized()?;
    Ok(reflect_unit(v, unit_normal))
}

/// Reflection about a normal the caller already knows to be unit length.
#[inline]
pub(crate) fn reflect_unit(v: Vector2D, unit_normal: Vector2D) -> Vector2D {
    v - unit_normal.scale(2.0 * v.dot(unit_normal))
}
