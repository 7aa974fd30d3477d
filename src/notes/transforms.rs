//! Document transforms
//!
//! Whole-document rewrites that run after parsing. For now that is only
//! [`flatten`], which turns contexts into plain notes.

pub mod flatten;

pub use flatten::{flatten, CONTEXT_LINK_VALUE};
