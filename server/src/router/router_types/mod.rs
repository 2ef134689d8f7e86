//! Types used by the router engine.

pub mod candidate;
pub mod edge;
pub mod outcome;
pub mod router;
