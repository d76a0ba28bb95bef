use crate::bodies::Entity;
use crate::collision::{CollisionInfo, EdgeRef, Side, VertexRef};
use crate::math::{AxisNormalization, Vector2};

/// Separating-axis test between two entities using component-sum axis scaling.
///
/// See [`collides_with`].
pub fn collides(first: &Entity, second: &Entity) -> Option<CollisionInfo> {
    collides_with(first, second, AxisNormalization::ComponentSum)
}

/// Separating-axis test between two entities.
///
/// Every edge of `first`, then every edge of `second`, contributes its perpendicular
/// as a candidate axis. The first axis on which the projections are disjoint ends
/// the test with `None`. Otherwise the axis of least overlap becomes the contact
/// normal, its edge the pierced edge, and the other entity's point deepest along
/// the normal the piercing vertex.
///
/// Uses the entities' stored centers, so callers must run
/// [`Entity::calculate_center`] after moving points.
///
/// Returns `None` without touching the geometry when both entities are static or
/// their collision filters exclude each other.
pub fn collides_with(
    first: &Entity,
    second: &Entity,
    normalization: AxisNormalization,
) -> Option<CollisionInfo> {
    if first.is_static() && second.is_static() {
        return None;
    }
    if !first.can_collide_with(second) {
        return None;
    }

    let candidates = first
        .edges()
        .iter()
        .enumerate()
        .map(|(index, edge)| (Side::First, index, edge.endpoints(first.points())))
        .chain(
            second
                .edges()
                .iter()
                .enumerate()
                .map(|(index, edge)| (Side::Second, index, edge.endpoints(second.points()))),
        );

    let mut depth = f64::INFINITY;
    let mut best: Option<(Vector2, EdgeRef)> = None;

    for (side, index, (p, q)) in candidates {
        let Some(axis) = normalization.axis(Vector2::new(p.y - q.y, q.x - p.x)) else {
            continue;
        };

        let (min_a, max_a) = first.project_to_axis(&axis);
        let (min_b, max_b) = second.project_to_axis(&axis);

        let dist = if min_a < min_b {
            min_b - max_a
        } else {
            min_a - max_b
        };

        if dist > 0.0 {
            return None;
        }

        if dist.abs() < depth {
            depth = dist.abs();
            best = Some((axis, EdgeRef { side, index }));
        }
    }

    let (mut normal, edge) = best?;

    let (piercing, pierced) = match edge.side {
        Side::First => (second, first),
        Side::Second => (first, second),
    };

    if normal.dot(&(piercing.get_center() - pierced.get_center())) < 0.0 {
        normal = -normal;
    }

    let (mass_ratio_a, mass_ratio_b) = mass_ratios(piercing, pierced);
    let vertex = VertexRef {
        side: edge.side.other(),
        index: deepest_vertex(piercing, pierced.get_center(), normal),
    };

    tracing::trace!(depth, ?normal, ?edge, ?vertex, "entities overlap");

    Some(CollisionInfo {
        depth,
        mass_ratio_a,
        mass_ratio_b,
        normal,
        edge,
        vertex,
    })
}

/// Correction shares for the piercing and the pierced entity.
///
/// A static entity takes no share and leaves all of it to the other one;
/// otherwise each side's share is its own fraction of the total mass.
fn mass_ratios(piercing: &Entity, pierced: &Entity) -> (f64, f64) {
    let total = piercing.get_mass() + pierced.get_mass();

    let piercing_ratio = if piercing.is_static() {
        0.0
    } else if pierced.is_static() {
        1.0
    } else {
        piercing.get_mass() / total
    };

    let pierced_ratio = if pierced.is_static() {
        0.0
    } else if piercing.is_static() {
        1.0
    } else {
        pierced.get_mass() / total
    };

    (piercing_ratio, pierced_ratio)
}

/// Index of the point of `piercing` with the smallest projection of
/// `location - pierced_center` onto `normal`. Ties keep the earliest point.
fn deepest_vertex(piercing: &Entity, pierced_center: Vector2, normal: Vector2) -> usize {
    let mut deepest = 0;
    let mut smallest = f64::INFINITY;

    for (index, point) in piercing.points().iter().enumerate() {
        let distance = normal.dot(&(point.location - pierced_center));
        if distance < smallest {
            smallest = distance;
            deepest = index;
        }
    }

    deepest
}
