use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt::Debug;
use std::net::IpAddr;

use tracing::debug;

use crate::{API_ROOT, REMOTE_ADDR_KEY};

/// Server variables of the request being handled.
///
/// Helpers that need ambient request data take this explicitly instead of
/// reaching into process state. Build it from whatever the web layer exposes,
/// or from the environment under CGI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    vars: HashMap<String, String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the server variables of a CGI request from the environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_env() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    /// Builds a context from raw OS strings, skipping pairs that are not
    /// valid UTF-8.
    pub fn from_os_vars<I: IntoIterator<Item = (OsString, OsString)>>(vars: I) -> Self {
        vars.into_iter()
            .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (key, _) => {
                    debug!(?key, "skipping non-UTF-8 server variable");
                    None
                }
            })
            .collect()
    }

    /// Sets `REMOTE_ADDR`.
    #[must_use]
    pub fn with_remote_addr(mut self, addr: impl Into<String>) -> Self {
        self.vars.insert(REMOTE_ADDR_KEY.to_owned(), addr.into());
        self
    }

    /// Looks up a server variable by name.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// The client address as reported by the server, unparsed.
    pub fn remote_address(&self) -> Option<&str> {
        self.var(REMOTE_ADDR_KEY)
    }

    /// The client address, if it is a valid IPv4 or IPv6 literal.
    pub fn remote_ip(&self) -> Option<IpAddr> {
        self.remote_address()?.trim().parse().ok()
    }
}

impl<K, V> FromIterator<(K, V)> for RequestContext
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Path prefix of a versioned API, e.g. `/api/v1`.
pub fn api_prefix(version: &str) -> String {
    format!("{API_ROOT}/{version}")
}

/// Pretty-prints a value inside `<pre>` tags for quick inspection in a page.
pub fn pretty<T: Debug + ?Sized>(value: &T) -> String {
    format!("<pre>{value:#?}</pre>")
}
