mod edge;

pub use self::edge::Edge;
