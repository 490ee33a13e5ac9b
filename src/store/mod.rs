//! Central state container.
//!
//! A [`Store`] owns one state value and a pure reducer. Every dispatched
//! action is folded into the state with the reducer, then every live
//! [`Selection`] is offered the new state. Selections are the observer side:
//! each holds a selector and the receiving end of a channel, receives the
//! selected value once on subscription, and afterwards only when the value
//! changes.
//!
//! The container performs no I/O. Side effects live in [`crate::effects`],
//! and [`crate::shop::Shop`] wires the two together.
//!
//! # Example
//!
//! ```
//! use turtleshop::store::{app_store, products, Action};
//! use turtleshop::store::products::ProductsAction;
//!
//! let mut store = app_store();
//! let mut count = store.select(products::select_favorite_count);
//! assert_eq!(count.next(), Some(0));
//!
//! store.dispatch(&Action::from(ProductsAction::ToggleFavorite(3)));
//! assert_eq!(count.next(), Some(1));
//! ```

pub mod app;
pub mod auth;
pub mod products;

pub use app::{app_store, reduce, Action, AppState, AppStore};

use std::sync::mpsc::{self, Receiver, Sender};

/// A pure state transition.
pub type Reducer<S, A> = fn(S, &A) -> S;

/// Explicit state container with subscriber notification.
pub struct Store<S, A> {
    state: S,
    reducer: Reducer<S, A>,
    watchers: Vec<Box<dyn Watcher<S>>>,
}

impl<S: Default + 'static, A> Store<S, A> {
    /// Create a store from an initial state and its reducer.
    pub fn new(initial: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state: initial,
            reducer,
            watchers: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Apply an action and notify subscribers.
    ///
    /// Subscribers whose [`Selection`] has been dropped are pruned here.
    pub fn dispatch(&mut self, action: &A) {
        let current = std::mem::take(&mut self.state);
        self.state = (self.reducer)(current, action);

        let state = &self.state;
        self.watchers.retain_mut(|watcher| watcher.notify(state));
    }

    /// Subscribe to a value derived from the state.
    ///
    /// The current value is delivered immediately, later values only when
    /// they differ from the last one delivered.
    pub fn select<T, F>(&mut self, selector: F) -> Selection<T>
    where
        T: Clone + PartialEq + 'static,
        F: Fn(&S) -> T + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let initial = selector(&self.state);
        // The receiver is alive until this function returns.
        let _ = tx.send(initial.clone());

        self.watchers.push(Box::new(SelectorWatcher {
            selector: Box::new(selector),
            last: initial,
            tx,
        }));

        Selection { rx }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.watchers.len()
    }
}

/// Receiving end of a store subscription.
///
/// Iterating yields the values delivered so far without blocking. The
/// iterator is not fused: once it returns `None`, a later dispatch can make
/// it yield again.
#[derive(Debug)]
pub struct Selection<T> {
    rx: Receiver<T>,
}

impl<T> Selection<T> {
    /// Drain pending values and return the newest one.
    pub fn latest(&mut self) -> Option<T> {
        let mut latest = None;
        while let Ok(value) = self.rx.try_recv() {
            latest = Some(value);
        }
        latest
    }
}

impl<T> Iterator for Selection<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }
}

trait Watcher<S> {
    /// Offer a new state; returns false once the subscriber is gone.
    fn notify(&mut self, state: &S) -> bool;
}

struct SelectorWatcher<S, T> {
    selector: Box<dyn Fn(&S) -> T>,
    last: T,
    tx: Sender<T>,
}

impl<S, T: Clone + PartialEq> Watcher<S> for SelectorWatcher<S, T> {
    fn notify(&mut self, state: &S) -> bool {
        let next = (self.selector)(state);
        if next == self.last {
            return true;
        }
        self.last = next.clone();
        self.tx.send(next).is_ok()
    }
}
