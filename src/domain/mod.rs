// Domain layer: catalog records, lookup ports and the aggregation service.
// Nothing in here logs or touches configuration sources directly.

pub mod image_url;
pub mod model;
pub mod ports;
pub mod services;
