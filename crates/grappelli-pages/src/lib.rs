//! Application shell for Grappelli.
//!
//! This crate holds the composition root: [`app::compose`] seeds a store
//! with router information, builds a matcher from the configured route
//! table, and wraps child content in an [`shell::AppShell`] that hands the
//! store, matcher, and location to descendants through an explicit
//! [`shell::AppContext`].

pub mod app;
pub mod component;
pub mod shell;

pub use app::{AppConfig, compose};
pub use component::Component;
pub use shell::{AppContext, AppShell};
