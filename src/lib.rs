//! planet-api - A strict, filterable planet catalog service
//!
//! A catalog of planet records with one interesting behavior: searches are
//! built dynamically from optional exact-match terms, and a term that is
//! absent or empty constrains nothing.

pub mod cli;
pub mod domain;
pub mod http;
pub mod store;
