use crate::bodies::Entity;
use crate::collision::{CollisionInfo, Side};
use crate::math::{approx_zero, Axis, Vector2};

/// Pushes two overlapping entities apart along the contact normal.
///
/// `first` and `second` must be the entities, in order, that produced `info`.
///
/// The piercing vertex moves by `response * mass_ratio_a`. The pierced edge's
/// endpoints move against the response, weighted by where the contact falls along
/// the edge (`t`) and scaled by `1 / (t² + (1 - t)²)`, so an off-center contact
/// moves the nearer endpoint more and turns the edge. Previous locations are not
/// touched; the correction shows up as velocity on the next step.
///
/// Nothing moves if `info` refers to an edge or point the entities do not have, or
/// if any of the three corrections is not finite.
pub fn resolve_collision(first: &mut Entity, second: &mut Entity, info: &CollisionInfo) {
    let (piercing, pierced) = match info.piercing() {
        Side::First => (first, second),
        Side::Second => (second, first),
    };

    let Some(&edge) = pierced.edges().get(info.edge.index) else {
        tracing::trace!(edge = info.edge.index, "pierced edge not found, skipping resolution");
        return;
    };
    let Some(vertex) = piercing.points().get(info.vertex.index).map(|p| p.location) else {
        tracing::trace!(vertex = info.vertex.index, "piercing vertex not found, skipping resolution");
        return;
    };

    let response = info.response();
    let (p1, p2) = edge.endpoints(pierced.points());

    let t = contact_parameter(p1, p2, vertex - response);
    let lambda = 1.0 / (t * t + (1.0 - t) * (1.0 - t));

    let vertex_push = response * info.mass_ratio_a;
    let push_a = response * ((1.0 - t) * info.mass_ratio_b * lambda);
    let push_b = response * (t * info.mass_ratio_b * lambda);

    if !(vertex_push.is_finite() && push_a.is_finite() && push_b.is_finite()) {
        tracing::trace!(depth = info.depth, t, "skipping non-finite collision correction");
        return;
    }

    piercing.points_mut()[info.vertex.index].location += vertex_push;

    let points = pierced.points_mut();
    points[edge.point_a()].location -= push_a;
    points[edge.point_b()].location -= push_b;
}

/// Where `contact` falls along `p1 -> p2`, measured on the edge's longer axis.
///
/// Returns the midpoint for an edge too short to measure.
fn contact_parameter(p1: Vector2, p2: Vector2, contact: Vector2) -> f64 {
    let extent = p2 - p1;
    let axis = if extent.x.abs() > extent.y.abs() {
        Axis::X
    } else {
        Axis::Y
    };

    if approx_zero(extent[axis]) {
        tracing::trace!("pierced edge has no extent, splitting correction evenly");
        return 0.5;
    }

    (contact[axis] - p1[axis]) / extent[axis]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_parameter_uses_longer_axis() {
        let t = contact_parameter(
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 1.0),
            Vector2::new(1.0, 100.0),
        );
        assert_eq!(t, 0.25);

        let t = contact_parameter(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, -4.0),
            Vector2::new(100.0, -3.0),
        );
        assert_eq!(t, 0.75);
    }

    #[test]
    fn contact_parameter_on_collapsed_edge() {
        let p = Vector2::new(2.0, 2.0);
        assert_eq!(contact_parameter(p, p, Vector2::zero()), 0.5);
    }
}
