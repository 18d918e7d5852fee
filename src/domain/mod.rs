// Domain layer: vacancy grouping, stat rows and the ports sources implement.

pub mod model;
pub mod ports;
