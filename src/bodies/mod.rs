mod body_type;
mod entity;
mod point;

pub use self::body_type::BodyType;
pub use self::entity::{Entity, MIN_POINTS};
pub use self::point::Point;
