// Domain layer: core models, ports (interfaces) and snapshot edits.

pub mod edit;
pub mod model;
pub mod ports;
