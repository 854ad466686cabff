//! Screen layer: MVI primitives, the store runtime and screen features.

pub mod map;
pub mod mvi;
pub mod store;
