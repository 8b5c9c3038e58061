//! Store - the application state container.
//!
//! `Store` holds a [`StateMap`] and notifies subscribers synchronously after
//! every mutation. It is constructed once per composition and shared via
//! `Arc`; construction is pure and synchronous.
//!
//! ## Example
//!
//! ```ignore
//! use grappelli_core::store::Store;
//! use grappelli_core::state::StateMap;
//!
//! let store = Store::new(StateMap::new());
//! store.set("count", serde_json::json!(1));
//! assert_eq!(store.get("count"), Some(serde_json::json!(1)));
//! ```

use crate::state::{ROUTER_STATE_KEY, RouterState, StateMap};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic source for store identities.
static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(0);

/// Identifier for a registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A listener invoked with the new state after every mutation.
pub type Listener = Arc<dyn Fn(&StateMap) + Send + Sync>;

/// A state container holding application state and notifying subscribers
/// of changes.
///
/// Every `Store` carries a process-unique id, so two stores built from
/// identical input remain distinguishable. There is no caching: each call
/// to [`Store::new`] produces a fresh container.
pub struct Store {
	/// Process-unique identity of this container.
	id: u64,
	/// The current state.
	state: RwLock<StateMap>,
	/// Registered listeners keyed by subscription id.
	listeners: RwLock<HashMap<u64, Listener>>,
	/// Source for subscription ids within this store.
	next_subscription: AtomicU64,
}

impl Store {
	/// Creates a new store seeded with the given state.
	pub fn new(initial: StateMap) -> Self {
		let id = NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed);
		tracing::debug!(store_id = id, keys = initial.len(), "store created");

		Self {
			id,
			state: RwLock::new(initial),
			listeners: RwLock::new(HashMap::new()),
			next_subscription: AtomicU64::new(0),
		}
	}

	/// Returns the process-unique identity of this store.
	pub fn id(&self) -> u64 {
		self.id
	}

	/// Returns the value for a key, if present.
	pub fn get(&self, key: &str) -> Option<serde_json::Value> {
		self.state.read().get(key).cloned()
	}

	/// Sets a single key to a new value and notifies subscribers.
	pub fn set(&self, key: impl Into<String>, value: serde_json::Value) {
		{
			let mut state = self.state.write();
			state.insert(key.into(), value);
		}
		self.notify();
	}

	/// Mutates the state with a function and notifies subscribers once.
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut StateMap),
	{
		{
			let mut state = self.state.write();
			f(&mut state);
		}
		self.notify();
	}

	/// Merges a partial state into the current state and notifies
	/// subscribers. Incoming entries win over existing ones.
	pub fn hydrate(&self, partial: StateMap) {
		{
			let mut state = self.state.write();
			state.extend(partial);
		}
		self.notify();
	}

	/// Returns a clone of the full current state.
	pub fn snapshot(&self) -> StateMap {
		self.state.read().clone()
	}

	/// Returns the typed router entry, if present and well-formed.
	pub fn router_state(&self) -> Option<RouterState> {
		let value = self.get(ROUTER_STATE_KEY)?;
		serde_json::from_value(value).ok()
	}

	/// Registers a listener invoked after every mutation.
	pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
	where
		F: Fn(&StateMap) + Send + Sync + 'static,
	{
		let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
		self.listeners.write().insert(id, Arc::new(listener));
		SubscriptionId(id)
	}

	/// Removes a previously registered listener.
	///
	/// Unknown ids are ignored.
	pub fn unsubscribe(&self, id: SubscriptionId) {
		self.listeners.write().remove(&id.0);
	}

	/// Returns the number of registered listeners.
	pub fn subscriber_count(&self) -> usize {
		self.listeners.read().len()
	}

	fn notify(&self) {
		// Snapshot listeners first so a listener may subscribe/unsubscribe
		// without deadlocking.
		let listeners: Vec<Listener> = self.listeners.read().values().cloned().collect();
		let state = self.state.read().clone();
		for listener in listeners {
			listener(&state);
		}
	}
}

impl std::fmt::Debug for Store {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Store")
			.field("id", &self.id)
			.field("keys", &self.state.read().len())
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::state::initial_state;
	use serde_json::json;
	use std::sync::Mutex;

	#[test]
	fn test_store_seeded_with_initial_state() {
		let mut initial = StateMap::new();
		initial.insert("count".to_string(), json!(0));

		let store = Store::new(initial);
		assert_eq!(store.get("count"), Some(json!(0)));
		assert_eq!(store.get("missing"), None);
	}

	#[test]
	fn test_store_set_and_get() {
		let store = Store::new(StateMap::new());
		store.set("theme", json!("dark"));
		assert_eq!(store.get("theme"), Some(json!("dark")));
	}

	#[test]
	fn test_store_update() {
		let store = Store::new(StateMap::new());
		store.update(|state| {
			state.insert("a".to_string(), json!(1));
			state.insert("b".to_string(), json!(2));
		});

		assert_eq!(store.snapshot().len(), 2);
	}

	#[test]
	fn test_store_hydrate_incoming_wins() {
		let mut initial = StateMap::new();
		initial.insert("x".to_string(), json!("old"));
		let store = Store::new(initial);

		let mut partial = StateMap::new();
		partial.insert("x".to_string(), json!("new"));
		partial.insert("y".to_string(), json!(true));
		store.hydrate(partial);

		assert_eq!(store.get("x"), Some(json!("new")));
		assert_eq!(store.get("y"), Some(json!(true)));
	}

	#[test]
	fn test_store_ids_are_unique() {
		let a = Store::new(StateMap::new());
		let b = Store::new(StateMap::new());
		assert_ne!(a.id(), b.id());
	}

	#[test]
	fn test_subscribe_receives_new_state() {
		let store = Store::new(StateMap::new());
		let seen = Arc::new(Mutex::new(Vec::new()));

		let seen_clone = Arc::clone(&seen);
		store.subscribe(move |state| {
			seen_clone
				.lock()
				.unwrap()
				.push(state.get("n").cloned());
		});

		store.set("n", json!(1));
		store.set("n", json!(2));

		let seen = seen.lock().unwrap();
		assert_eq!(*seen, vec![Some(json!(1)), Some(json!(2))]);
	}

	#[test]
	fn test_unsubscribe_stops_notifications() {
		let store = Store::new(StateMap::new());
		let calls = Arc::new(AtomicU64::new(0));

		let calls_clone = Arc::clone(&calls);
		let sub = store.subscribe(move |_| {
			calls_clone.fetch_add(1, Ordering::Relaxed);
		});

		store.set("k", json!(1));
		store.unsubscribe(sub);
		store.set("k", json!(2));

		assert_eq!(calls.load(Ordering::Relaxed), 1);
		assert_eq!(store.subscriber_count(), 0);
	}

	#[test]
	fn test_unsubscribe_unknown_id_is_ignored() {
		let store = Store::new(StateMap::new());
		let other = Store::new(StateMap::new());
		let sub = other.subscribe(|_| {});

		store.unsubscribe(sub);
		assert_eq!(store.subscriber_count(), 0);
	}

	#[test]
	fn test_router_state_view() {
		let store = Store::new(initial_state(StateMap::new(), Some("/home")));

		let router = store.router_state().unwrap();
		assert_eq!(router.location.as_deref(), Some("/home"));
		assert!(router.params.is_empty());
	}

	#[test]
	fn test_router_state_absent() {
		let store = Store::new(StateMap::new());
		assert!(store.router_state().is_none());
	}

	#[test]
	fn test_router_state_malformed_is_none() {
		let store = Store::new(StateMap::new());
		store.set(ROUTER_STATE_KEY, json!("garbage"));
		assert!(store.router_state().is_none());
	}
}
