// Domain layer: value types and the config port. No dependencies beyond std.

pub mod model;
pub mod ports;
