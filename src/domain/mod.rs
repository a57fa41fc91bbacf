// Domain layer: vocabularies, trip records and ports (interfaces).

pub mod model;
pub mod ports;
