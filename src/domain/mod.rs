// Domain layer: report models and ports (interfaces). No IO happens here.

pub mod model;
pub mod ports;
