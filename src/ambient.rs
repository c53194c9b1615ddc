//! Ambient process environment, used as the fallback source for context values.
//!
//! The resolver never reads global state directly. Whatever the host process knows about itself
//! (its session id, the remote peer it is serving, the machine hostname) is injected through the
//! [`Ambient`] trait, so resolution stays deterministic and testable with fixed values.

use std::env;

/// Accessor for the ambient values a context falls back to when it carries no explicit value.
///
/// All methods are total; an environment that doesn't know a value returns `None` rather than
/// failing.
pub trait Ambient {
    /// Session identifier of the calling process, if it has one.
    fn session_id(&self) -> Option<String>;

    /// Remote address of the peer the calling process is serving, if known.
    fn remote_address(&self) -> Option<String>;

    /// Hostname of the machine the process runs on.
    fn hostname(&self) -> Option<String>;
}

/// The default accessor, backed by the process environment.
///
/// A Rust server process has no process-global session or peer address, so both resolve to
/// `None`. Hosts that carry per-request identity should inject a [`StaticAmbient`] (or their own
/// implementation) populated from the request instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessAmbient;

impl Ambient for ProcessAmbient {
    fn session_id(&self) -> Option<String> {
        None
    }

    fn remote_address(&self) -> Option<String> {
        None
    }

    fn hostname(&self) -> Option<String> {
        env::var("HOSTNAME").ok().filter(|name| !name.is_empty())
    }
}

/// Fixed ambient values.
///
/// Useful in tests and for embedders that resolve session or peer identity themselves and want
/// the resolver to fall back to those values.
#[derive(Debug, Clone, Default)]
pub struct StaticAmbient {
    /// Fallback session identifier.
    pub session_id: Option<String>,
    /// Fallback remote address.
    pub remote_address: Option<String>,
    /// Fallback hostname.
    pub hostname: Option<String>,
}

impl Ambient for StaticAmbient {
    fn session_id(&self) -> Option<String> {
        self.session_id.clone()
    }

    fn remote_address(&self) -> Option<String> {
        self.remote_address.clone()
    }

    fn hostname(&self) -> Option<String> {
        self.hostname.clone()
    }
}
