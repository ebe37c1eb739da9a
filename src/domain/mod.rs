// Domain layer: entities, identity and ports. Knows nothing about stores,
// menus or configuration files.

pub mod identity;
pub mod model;
pub mod ports;
