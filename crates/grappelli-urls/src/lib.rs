//! URL pattern matching for the Grappelli shell.
//!
//! This crate provides compiled path patterns, route definitions, and the
//! [`Matcher`] that resolves a path string to a matching route and its
//! extracted parameters. The route table is an ordered sequence fixed at
//! construction; first match wins.

pub mod error;
pub mod matcher;
pub mod params;
pub mod pattern;
pub mod route;

pub use error::{MatcherError, PathError, PatternError};
pub use matcher::Matcher;
pub use params::{FromPath, ParamContext, Path, SingleFromPath};
pub use pattern::PathPattern;
pub use route::{Route, RouteMatch};
