//! # galign
//!
//! Tools for sentence alignment of parallel text.
//!
//! - [`prep`] turns plain text into a one-token-per-line stream where comment
//!   lines become `.PARA` and every other line ends with `.End of Sentence`.
//! - [`align`] aligns two such streams region by region with the Gale-Church
//!   length model.
//!
//! Both tools read their markers and costs from [`config`]; the binaries
//! `align-prep` and `align-regions` are thin wrappers over these modules.

pub mod align;
pub mod config;
pub mod error;
pub mod files;
pub mod logging;
pub mod prep;
pub mod text;

pub use error::{AlignError, PrepError, ResourceError};
