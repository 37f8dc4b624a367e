// Domain layer: sale records, the predicate model and the ports the engine talks through.

pub mod model;
pub mod ports;
pub mod predicate;
