// Domain layer: value types and the ports the generator writes through.

pub mod model;
pub mod ports;
