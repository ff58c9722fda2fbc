//! Convex shape descriptions and support mappings for a rigid-body
//! narrow phase. Every shape is a margin-rounded convex hull queried
//! through the [`Shape`] trait; proxies bind a shape to one body
//! attachment inside a [`ShapeArena`].

mod arena;
mod proxy;
mod raycast;
mod shapes;

pub mod settings;

pub use arena::*;
pub use proxy::*;
pub use raycast::*;
pub use shapes::*;
