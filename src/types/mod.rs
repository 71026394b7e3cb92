//! Data types for the catalog editor.

mod book;
mod row;

pub use book::*;
pub use row::*;
