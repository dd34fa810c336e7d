//! Network access for marquee.
//!
//! Provides the [`FetchGateway`] seam over the upstream catalog service,
//! its HTTP implementation, the session-lifetime [`EnrichmentCache`] of
//! per-artist locations, and the layered [`Config`].

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod resilience;

pub use cache::EnrichmentCache;
pub use client::HttpGateway;
pub use config::Config;
pub use error::{FetchError, FetchResult};
pub use gateway::{load_catalog, FetchGateway};
