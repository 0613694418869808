//! Site generation for plinth.
//!
//! Composes the shared page layout, the page content, and the build step
//! that writes the finished site to disk.

pub mod builder;
pub mod layout;
pub mod pages;

pub use builder::{BuildError, BuildResult, SiteBuilder, SiteConfig};
