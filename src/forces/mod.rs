mod force_generator;

pub use self::force_generator::{
    ConstantForceGenerator, ForceGenerator, ForceRegistry, PointForceGenerator,
};
