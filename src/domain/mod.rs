// Domain layer: the report model and the output port. std only.

pub mod model;
pub mod ports;
