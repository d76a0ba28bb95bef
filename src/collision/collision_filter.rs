use bitflags::bitflags;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

bitflags! {
    /// A bit mask representing a collision group
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
    pub struct CollisionGroup: u32 {
        /// Default group (collides with everything)
        const DEFAULT  = 0x00000001;

        /// Static scenery
        const SCENERY  = 0x00000002;

        /// Soft bodies driven by the solver
        const BODY     = 0x00000004;

        /// Debris that should not collide with other debris
        const DEBRIS   = 0x00000008;

        /// Group 5
        const GROUP5   = 0x00000010;

        /// Group 6
        const GROUP6   = 0x00000020;

        /// Group 7
        const GROUP7   = 0x00000040;

        /// Group 8
        const GROUP8   = 0x00000080;

        /// All groups
        const ALL      = 0xFFFFFFFF;
    }
}

impl Default for CollisionGroup {
    fn default() -> Self {
        CollisionGroup::DEFAULT
    }
}

/// Type alias for a collision mask (what groups this object collides with)
pub type CollisionMask = CollisionGroup;

/// Group/mask pair deciding which entities are tested against each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CollisionFilter {
    /// The groups this entity belongs to
    pub group: CollisionGroup,

    /// The groups this entity collides with
    pub mask: CollisionMask,
}

impl CollisionFilter {
    /// Creates a filter from a group and a mask
    pub fn new(group: CollisionGroup, mask: CollisionMask) -> Self {
        Self { group, mask }
    }

    /// Returns whether two filters allow a collision test.
    ///
    /// A collides with B if A's mask includes B's group and B's mask includes A's group.
    pub fn should_collide(&self, other: &CollisionFilter) -> bool {
        self.mask.intersects(other.group) && other.mask.intersects(self.group)
    }
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self {
            group: CollisionGroup::DEFAULT,
            mask: CollisionMask::ALL,
        }
    }
}
