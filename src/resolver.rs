//! Total resolution of context fields, with ambient fallbacks.

use crate::ambient::{Ambient, ProcessAmbient};
use crate::Context;

/// Well-known context field names.
///
/// Strategy definitions refer to fields by these strings. The stickiness field names (`userId`,
/// `sessionId`) are the same strings, so they resolve through the same table.
pub mod context_field {
    /// Resolves from the context user id.
    pub const USER_ID: &str = "userId";
    /// Resolves from the context session id, falling back to the ambient session id.
    pub const SESSION_ID: &str = "sessionId";
    /// Resolves from the context IP address, falling back to the ambient remote address.
    pub const IP_ADDRESS: &str = "ipAddress";
    /// Resolves from the context environment name.
    pub const ENVIRONMENT: &str = "environment";
    /// Reserved custom property key holding the hostname; falls back to the ambient hostname.
    pub const HOSTNAME: &str = "hostname";
}

/// Resolves field names to the single string value strategies key on.
///
/// Resolution is pure and total: every field name yields either a value or `None`, never an
/// error. Well-known fields resolve from the context's explicit values first; `sessionId`,
/// `ipAddress`, and `hostname` fall back to the injected [`Ambient`] accessor when unset. Any
/// other name looks up the context's custom properties.
pub struct ContextResolver<A = ProcessAmbient> {
    ambient: A,
}

impl Default for ContextResolver {
    fn default() -> Self {
        ContextResolver::new(ProcessAmbient)
    }
}

impl<A: Ambient> ContextResolver<A> {
    /// Create a resolver over the given ambient accessor.
    pub fn new(ambient: A) -> Self {
        ContextResolver { ambient }
    }

    /// Look up the value of `field_name` for the given context.
    ///
    /// Explicit context values always take precedence over ambient fallbacks. Returns `None`
    /// when nothing is found.
    pub fn find_value(&self, context: &Context, field_name: &str) -> Option<String> {
        match field_name {
            context_field::USER_ID => context.user_id().map(str::to_owned),
            context_field::SESSION_ID => context
                .session_id()
                .map(str::to_owned)
                .or_else(|| self.ambient.session_id()),
            context_field::IP_ADDRESS => context
                .ip_address()
                .map(str::to_owned)
                .or_else(|| self.ambient.remote_address()),
            context_field::ENVIRONMENT => context.environment().map(str::to_owned),
            context_field::HOSTNAME => context
                .property(context_field::HOSTNAME)
                .map(str::to_owned)
                .or_else(|| self.ambient.hostname()),
            _ => context.property(field_name).map(str::to_owned),
        }
    }

    /// Whether the resolved value of `field_name` is exactly one of `candidates`.
    ///
    /// The comparison is ordinal and case-sensitive. Returns `false` when the field resolves to
    /// nothing. This is the primitive allow-list strategies are built on.
    pub fn has_matching_value(
        &self,
        context: &Context,
        field_name: &str,
        candidates: &[impl AsRef<str>],
    ) -> bool {
        let Some(value) = self.find_value(context, field_name) else {
            return false;
        };
        candidates.iter().any(|candidate| candidate.as_ref() == value)
    }
}
