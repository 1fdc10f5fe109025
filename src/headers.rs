//! Wire-level header names and header-bag capabilities
//!
//! The crate never owns a request or response; it reads and writes headers
//! through the two capability traits below, implemented by whatever types the
//! host HTTP client uses.

use std::collections::HashMap;

/// Request header advertising which content codings the client accepts.
pub const ACCEPT_ENCODING: &str = "Accept-Encoding";

/// Response header identifying how the body bytes are encoded on the wire.
pub const CONTENT_ENCODING: &str = "Content-Encoding";

/// The only content coding this crate negotiates.
pub const GZIP: &str = "gzip";

/// Write access to an outgoing request's header bag.
pub trait RequestHeaders {
    /// Sets `name` to `value`, replacing any previous value for that name.
    fn set_header(&mut self, name: &str, value: &str);
}

/// Read access to an incoming response's header bag.
pub trait ResponseHeaders {
    /// Returns the value of `name`, if the response carries it.
    fn header(&self, name: &str) -> Option<&str>;
}

impl RequestHeaders for HashMap<String, String> {
    fn set_header(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl ResponseHeaders for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}
