// Domain layer: value types and the clock port. No behaviour beyond formatting.

pub mod model;
pub mod ports;
