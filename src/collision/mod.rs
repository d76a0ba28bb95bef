mod collision_filter;
mod collision_pair;
mod contact;
mod resolve;
mod sat;

pub use self::collision_filter::{CollisionFilter, CollisionGroup, CollisionMask};
pub use self::collision_pair::{CollisionPair, CollisionState};
pub use self::contact::{CollisionInfo, EdgeRef, Side, VertexRef};
pub use self::resolve::resolve_collision;
pub use self::sat::{collides, collides_with};
