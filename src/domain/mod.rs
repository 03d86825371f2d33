// Domain layer: the label table, the session result and the entropy port.
// No I/O here; concrete sources live in adapters.

pub mod model;
pub mod ports;
