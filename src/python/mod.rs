//! Python interface for the Dash front-end.

pub mod bindings;
pub mod numpy_bridge;
