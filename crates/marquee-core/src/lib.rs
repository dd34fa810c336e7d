//! Core domain model for marquee.
//!
//! This crate defines the artist catalog model (Artist, LocationSet), the
//! filter constraint types, and the session-scoped catalog store that the
//! search engine reads from.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod constraints;
pub mod error;
pub mod model;

pub use catalog::CatalogStore;
pub use constraints::{CityToken, ConstraintSet, MemberCountFilter};
pub use error::{Error, Result};
