//! Defines the marker trait for values stored in `State`.

use std::any::Any;

use hyper::{HeaderMap, Method, Uri, Version};

use crate::state::request_id::RequestId;

/// A marker trait for types that can be stored in `State`.
///
/// ```rust
/// use route_mux::state::{State, StateData};
///
/// struct MyStateData {
///     x: u32,
/// }
///
/// impl StateData for MyStateData {}
///
/// State::with_new(|state| {
///     state.put(MyStateData { x: 1 });
///     assert_eq!(state.borrow::<MyStateData>().x, 1);
/// });
/// ```
pub trait StateData: Any + Send {}

impl StateData for Method {}
impl StateData for Uri {}
impl StateData for Version {}
impl StateData for HeaderMap {}

impl StateData for RequestId {}
