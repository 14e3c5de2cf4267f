// Domain layer: message, credentials and delivery outcome. No I/O here.

pub mod model;
