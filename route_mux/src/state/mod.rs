//! Defines the request state that matchers inspect.

mod data;
mod from_state;
pub mod request_id;

use std::any::{Any, TypeId};
use std::collections::HashMap;

use hyper::Request;
use log::trace;

pub use crate::state::data::StateData;
pub use crate::state::from_state::FromState;
pub use crate::state::request_id::request_id;

pub(crate) use crate::state::request_id::set_request_id;

/// The request as matchers see it: a type-keyed store holding at most one value per
/// `StateData` type. Matchers read the request `Uri` and `HeaderMap` from here, and a `State`
/// built with [`State::from_request`] always carries both.
///
/// # Examples
///
/// ```rust
/// use route_mux::state::{State, StateData};
///
/// struct MyStruct {
///   value: i32
/// }
///
/// impl StateData for MyStruct {}
///
/// State::with_new(|state| {
///     state.put(MyStruct { value: 1 });
///     assert_eq!(state.borrow::<MyStruct>().value, 1);
/// });
/// ```
pub struct State {
    data: HashMap<TypeId, Box<dyn Any + Send>>,
}

impl State {
    pub(crate) fn new() -> State {
        State {
            data: HashMap::new(),
        }
    }

    /// Creates a new, empty `State` and yields it mutably into the provided closure. No request
    /// data is present, so every matcher rejects it until a `Uri` or `HeaderMap` is `put`.
    pub fn with_new<F>(f: F)
    where
        F: FnOnce(&mut State),
    {
        f(&mut State::new())
    }

    /// Instantiate a new `State` for the given `Request`, keeping the parts matchers inspect.
    /// The body is discarded.
    ///
    /// ```rust
    /// use route_mux::hyper::{HeaderMap, Request, Uri};
    /// use route_mux::state::{request_id, FromState, State};
    ///
    /// let req = Request::get("https://example.com/users/42")
    ///     .header("x-request-id", "abc-123")
    ///     .body(())
    ///     .unwrap();
    /// let state = State::from_request(req);
    ///
    /// assert_eq!(Uri::borrow_from(&state).path(), "/users/42");
    /// assert!(HeaderMap::borrow_from(&state).contains_key("x-request-id"));
    /// assert_eq!(request_id(&state), "abc-123");
    /// ```
    pub fn from_request<B>(req: Request<B>) -> State {
        let mut state = State::new();

        let (parts, _) = req.into_parts();
        state.put(parts.method);
        state.put(parts.uri);
        state.put(parts.version);
        state.put(parts.headers);

        set_request_id(&mut state);
        state
    }

    /// Stores `t`, replacing any earlier value of the same type.
    pub fn put<T>(&mut self, t: T)
    where
        T: StateData,
    {
        let type_id = TypeId::of::<T>();
        trace!(" inserting record to state for type_id `{:?}`", type_id);
        self.data.insert(type_id, Box::new(t));
    }

    /// Whether a value of type `T` is stored.
    pub fn has<T>(&self) -> bool
    where
        T: StateData,
    {
        let type_id = TypeId::of::<T>();
        self.data.contains_key(&type_id)
    }

    /// Borrows the stored `T`, if any.
    pub fn try_borrow<T>(&self) -> Option<&T>
    where
        T: StateData,
    {
        let type_id = TypeId::of::<T>();
        trace!(" borrowing state data for type_id `{:?}`", type_id);
        self.data.get(&type_id).and_then(|b| b.downcast_ref::<T>())
    }

    /// Borrows the stored `T`.
    ///
    /// # Panics
    ///
    /// If no `T` is stored. Matchers use `try_borrow` instead.
    pub fn borrow<T>(&self) -> &T
    where
        T: StateData,
    {
        self.try_borrow()
            .expect("required type is not present in State")
    }

    /// Removes and returns the stored `T`, if any.
    pub fn try_take<T>(&mut self) -> Option<T>
    where
        T: StateData,
    {
        let type_id = TypeId::of::<T>();
        trace!(
            " taking ownership from state data for type_id `{:?}`",
            type_id
        );
        self.data
            .remove(&type_id)
            .and_then(|b| b.downcast::<T>().ok())
            .map(|b| *b)
    }
}
