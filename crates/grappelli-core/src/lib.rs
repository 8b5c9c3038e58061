//! # Grappelli Core
//!
//! Core components for the Grappelli shell: the renderable [`page::Page`]
//! tree, application [`state`] types, and the [`store::Store`] state
//! container.

pub mod page;
pub mod state;
pub mod store;

pub use page::{IntoPage, Page, PageElement};
pub use state::{ROUTER_STATE_KEY, RouterState, StateMap, initial_state};
pub use store::{Store, SubscriptionId};
