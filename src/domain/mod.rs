// Domain layer: value records, the prerequisite graph and the ports the core reads through.

pub mod graph;
pub mod model;
pub mod ports;
