use crate::math::Vector2;

/// Which of the two entities passed to a collision test owns an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first entity argument
    First,

    /// The second entity argument
    Second,
}

impl Side {
    /// Returns the opposite side
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// An edge of one of the two tested entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef {
    pub side: Side,
    pub index: usize,
}

/// A point of one of the two tested entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexRef {
    pub side: Side,
    pub index: usize,
}

/// The result of a penetrating separating-axis test.
///
/// The *pierced* entity owns `edge`; the *piercing* entity owns `vertex`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Overlap along `normal` on the axis of least overlap
    pub depth: f64,

    /// Share of the correction applied to the piercing vertex
    pub mass_ratio_a: f64,

    /// Share of the correction applied to the pierced edge
    pub mass_ratio_b: f64,

    /// Contact axis, pointing from the pierced entity toward the piercing one
    pub normal: Vector2,

    /// The pierced edge
    pub edge: EdgeRef,

    /// The deepest piercing vertex
    pub vertex: VertexRef,
}

impl CollisionInfo {
    /// The positional correction `normal * depth`
    #[inline]
    pub fn response(&self) -> Vector2 {
        self.normal * self.depth
    }

    /// The side whose edge was pierced
    #[inline]
    pub fn pierced(&self) -> Side {
        self.edge.side
    }

    /// The side whose vertex pierced the other entity
    #[inline]
    pub fn piercing(&self) -> Side {
        self.vertex.side
    }
}
