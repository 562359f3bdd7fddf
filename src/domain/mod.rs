// Domain layer: config models and the read-only provider interface.

pub mod model;
pub mod ports;
