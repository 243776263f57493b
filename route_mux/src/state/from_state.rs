use crate::state::{State, StateData};

/// A trait for accessing data that is stored in `State`.
///
/// This provides the easier `T::try_borrow_from(&state)` API (for example), as an alternative to
/// `state.try_borrow::<T>()`.
///
/// ```rust
/// use route_mux::hyper::Uri;
/// use route_mux::state::{FromState, State};
///
/// State::with_new(|state| {
///     assert!(Uri::try_borrow_from(state).is_none());
///
///     state.put(Uri::from_static("/a/b"));
///     assert_eq!(Uri::borrow_from(state).path(), "/a/b");
///
///     assert!(Uri::try_take_from(state).is_some());
///     assert!(!state.has::<Uri>());
/// });
/// ```
pub trait FromState: StateData + Sized {
    /// Tries to borrow a value from the `State` storage.
    fn try_borrow_from(state: &State) -> Option<&Self>;

    /// Borrows a value from the `State` storage.
    ///
    /// # Panics
    ///
    /// If `Self` is not present in `State`.
    fn borrow_from(state: &State) -> &Self;

    /// Tries to move a value out of the `State` storage and return ownership.
    fn try_take_from(state: &mut State) -> Option<Self>;
}

impl<T> FromState for T
where
    T: StateData,
{
    fn try_borrow_from(state: &State) -> Option<&Self> {
        state.try_borrow()
    }

    fn borrow_from(state: &State) -> &Self {
        state.borrow()
    }

    fn try_take_from(state: &mut State) -> Option<Self> {
        state.try_take()
    }
}
