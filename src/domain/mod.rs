// Domain layer: report model and the ports the engine runs against.

pub mod model;
pub mod ports;
