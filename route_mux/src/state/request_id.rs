//! Defines a unique id per `Request` that is output with all matcher logging.

use hyper::header::HeaderMap;
use log::trace;
use uuid::Uuid;

use crate::state::{FromState, State};

const X_REQUEST_ID: &str = "x-request-id";

/// Holds details about the current Request that are useful for enhancing logging.
pub(crate) struct RequestId {
    val: String,
}

/// Assigns the request an identifier unless it already has one: the `X-Request-ID` header
/// value when present and valid text, otherwise a fresh UUID v4.
pub(crate) fn set_request_id(state: &mut State) -> &str {
    if !state.has::<RequestId>() {
        let external = HeaderMap::try_borrow_from(state)
            .and_then(|headers| headers.get(X_REQUEST_ID))
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);

        let request_id = match external {
            Some(val) => {
                trace!(
                    "[{}] RequestId set from external source via X-Request-ID header",
                    val
                );
                RequestId { val }
            }
            None => {
                let val = Uuid::new_v4().hyphenated().to_string();
                trace!("[{}] RequestId generated internally", val);
                RequestId { val }
            }
        };
        state.put(request_id);
    };

    request_id(state)
}

/// Returns the unique Id associated with the current request, or `-` when none was assigned
/// (for example a `State` assembled by hand in a test).
pub fn request_id(state: &State) -> &str {
    match RequestId::try_borrow_from(state) {
        Some(request_id) => &request_id.val,
        None => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_header(value: Option<&'static str>) -> State {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert(X_REQUEST_ID, value.parse().unwrap());
        }
        let mut state = State::new();
        state.put(headers);
        state
    }

    #[test]
    fn placeholder_until_assigned() {
        assert_eq!(request_id(&State::new()), "-");
    }

    #[test]
    fn prefers_the_x_request_id_header() {
        let mut state = state_with_header(Some("trace-77"));
        assert_eq!(set_request_id(&mut state), "trace-77");
        assert_eq!(request_id(&state), "trace-77");
    }

    #[test]
    fn generates_a_v4_uuid_otherwise() {
        let mut state = state_with_header(None);
        let generated = set_request_id(&mut state).to_owned();

        let uuid = Uuid::parse_str(&generated).unwrap();
        assert_eq!(uuid.get_version_num(), 4);
        assert_eq!(request_id(&state), generated);
    }

    #[test]
    fn generates_without_any_headers() {
        let mut state = State::new();
        assert!(Uuid::parse_str(set_request_id(&mut state)).is_ok());
    }

    #[test]
    fn keeps_an_assigned_id() {
        let mut state = state_with_header(Some("first"));
        set_request_id(&mut state);

        state.put(HeaderMap::new());
        assert_eq!(set_request_id(&mut state), "first");
    }
}
