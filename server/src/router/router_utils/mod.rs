//! Building blocks of the cheapest-path search.

pub mod explorer;
pub mod formatter;
pub mod graph;
pub mod selector;
