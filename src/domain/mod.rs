// Domain layer: the project document, option catalogs and ports (interfaces).

pub mod catalog;
pub mod model;
pub mod ports;
