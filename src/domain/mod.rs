// Domain layer: input/profile models and ports (storage, configuration).

pub mod date;
pub mod model;
pub mod ports;
