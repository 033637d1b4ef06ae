//! Reducer store with middleware and synchronous subscribers.
//!
//! The store owns one state value. Each [`Store::dispatch`] runs the
//! middleware `before` hooks, calls the reducer exactly once, runs the
//! `after` hooks, swaps in the new state, and then notifies subscribers in
//! subscription order. Dispatch takes `&mut self`, so only one reduction is
//! ever in flight.

use std::fmt::{Debug, Display};
use tracing::{debug, info, instrument};

/// A pure state transition function.
pub trait Reducer {
    /// State the reducer operates on.
    type State: Clone;
    /// Actions the reducer understands.
    type Action;

    /// Produces the next state. Must not mutate `state`.
    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}

/// Hooks run around every dispatch.
pub trait Middleware<S, A> {
    /// Called before the reducer sees `action`.
    fn before(&mut self, _state: &S, _action: &A) {}

    /// Called after the reducer, before subscribers are notified.
    fn after(&mut self, _prev: &S, _action: &A, _next: &S) {}
}

/// Logs every dispatched action with the state before and after it.
#[derive(Debug, Clone, Default)]
pub struct LoggerMiddleware {
    dispatched: u64,
}

impl LoggerMiddleware {
    /// Creates a logger that has seen no actions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of actions logged so far.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}

impl<S: Debug, A: Display> Middleware<S, A> for LoggerMiddleware {
    fn before(&mut self, state: &S, action: &A) {
        self.dispatched += 1;
        info!(seq = self.dispatched, %action, "action");
        debug!(seq = self.dispatched, prev_state = ?state, "prev state");
    }

    fn after(&mut self, _prev: &S, _action: &A, next: &S) {
        debug!(seq = self.dispatched, next_state = ?next, "next state");
    }
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("subscription#{}", _0)]
pub struct SubscriptionId(u64);

type Subscriber<S> = Box<dyn FnMut(&S)>;

/// Owns the current state and routes actions through the reducer.
pub struct Store<R: Reducer> {
    state: R::State,
    reducer: R,
    middleware: Vec<Box<dyn Middleware<R::State, R::Action>>>,
    subscribers: Vec<(SubscriptionId, Subscriber<R::State>)>,
    next_subscription: u64,
}

impl<R: Reducer> Store<R> {
    /// Creates a store holding `initial`.
    pub fn new(reducer: R, initial: R::State) -> Self {
        Self {
            state: initial,
            reducer,
            middleware: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Appends a middleware; middleware run in the order added.
    pub fn with_middleware(
        mut self,
        middleware: impl Middleware<R::State, R::Action> + 'static,
    ) -> Self {
        self.add_middleware(middleware);
        self
    }

    /// Appends a middleware to an existing store.
    pub fn add_middleware(&mut self, middleware: impl Middleware<R::State, R::Action> + 'static) {
        self.middleware.push(Box::new(middleware));
    }

    /// The current state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Registers a listener called with the new state after every dispatch.
    pub fn subscribe(&mut self, listener: impl FnMut(&R::State) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(listener)));
        debug!(%id, "Subscriber added");
        id
    }

    /// Removes a listener. Returns false when `id` is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        before != self.subscribers.len()
    }

    /// Runs `action` through middleware and the reducer, then notifies subscribers.
    #[instrument(skip_all)]
    pub fn dispatch(&mut self, action: R::Action) -> &R::State {
        for middleware in &mut self.middleware {
            middleware.before(&self.state, &action);
        }

        let next = self.reducer.reduce(&self.state, &action);

        for middleware in &mut self.middleware {
            middleware.after(&self.state, &action, &next);
        }

        self.state = next;

        for (_, listener) in &mut self.subscribers {
            listener(&self.state);
        }
        &self.state
    }
}

impl<R> Debug for Store<R>
where
    R: Reducer + Debug,
    R::State: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("reducer", &self.reducer)
            .field("middleware", &self.middleware.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Counter;

    impl Reducer for Counter {
        type State = i64;
        type Action = i64;

        fn reduce(&self, state: &i64, action: &i64) -> i64 {
            state + action
        }
    }

    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Middleware<i64, i64> for Recorder {
        fn before(&mut self, state: &i64, action: &i64) {
            self.0.borrow_mut().push(format!("before {} {}", state, action));
        }

        fn after(&mut self, prev: &i64, _action: &i64, next: &i64) {
            self.0.borrow_mut().push(format!("after {} {}", prev, next));
        }
    }

    #[test]
    fn test_dispatch_runs_middleware_then_subscribers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new(Counter, 0).with_middleware(Recorder(log.clone()));
        let sub_log = log.clone();
        store.subscribe(move |s| sub_log.borrow_mut().push(format!("notify {}", s)));

        assert_eq!(*store.dispatch(5), 5);
        assert_eq!(*log.borrow(), ["before 0 5", "after 0 5", "notify 5"]);
    }

    #[test]
    fn test_unsubscribe() {
        let hits = Rc::new(RefCell::new(0));
        let mut store = Store::new(Counter, 0);
        let counter = hits.clone();
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.dispatch(1);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(1);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(*store.state(), 2);
    }

    #[test]
    fn test_logger_counts_actions() {
        let mut logger = LoggerMiddleware::new();
        Middleware::<i64, i64>::before(&mut logger, &0, &1);
        Middleware::<i64, i64>::before(&mut logger, &1, &1);
        assert_eq!(logger.dispatched(), 2);
    }
}
