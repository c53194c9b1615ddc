//! Evaluation context: the subject a toggle decision is made for.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{context_field, Error, Result};

/// The subject being evaluated: user id, session id, IP address, environment, and arbitrary
/// custom string properties.
///
/// A context is either constructed per evaluation request or built once and mutated between
/// requests; setters return `&mut Self` so configuration chains:
///
/// ```
/// # use toggle_core::Context;
/// let mut context = Context::new();
/// context
///     .set_user_id("u1")
///     .set_environment("production")
///     .set_custom_property("country", "SE");
/// ```
///
/// Hostname is stored as a custom property under the reserved key
/// [`context_field::HOSTNAME`](crate::context_field::HOSTNAME), not a distinct field, so it
/// participates in the same lookup path as other custom attributes.
///
/// Serializes with the camelCase field names of the toggle-service wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Context {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<String>,
    // The wire format calls this field `remoteAddress`.
    #[serde(rename = "remoteAddress", skip_serializing_if = "Option::is_none")]
    ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    properties: HashMap<String, String>,
}

impl Context {
    /// Create a new empty context.
    pub fn new() -> Context {
        Context::default()
    }

    /// The explicit user id, if set.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// The explicit session id, if set.
    ///
    /// The ambient-session fallback is applied by
    /// [`ContextResolver::find_value`](crate::ContextResolver::find_value), not here.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// The explicit IP address, if set.
    ///
    /// The ambient-address fallback is applied by
    /// [`ContextResolver::find_value`](crate::ContextResolver::find_value), not here.
    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }

    /// The explicit environment name, if set.
    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    /// The explicit hostname, if set.
    ///
    /// Reads the reserved `hostname` custom property. The ambient-hostname fallback is applied by
    /// [`ContextResolver::find_value`](crate::ContextResolver::find_value), not here.
    pub fn hostname(&self) -> Option<&str> {
        self.property(context_field::HOSTNAME)
    }

    /// Set or clear the user id.
    pub fn set_user_id<S>(&mut self, user_id: impl Into<Option<S>>) -> &mut Self
    where
        S: Into<String>,
    {
        self.user_id = user_id.into().map(Into::into);
        self
    }

    /// Set or clear the session id.
    pub fn set_session_id<S>(&mut self, session_id: impl Into<Option<S>>) -> &mut Self
    where
        S: Into<String>,
    {
        self.session_id = session_id.into().map(Into::into);
        self
    }

    /// Set or clear the IP address.
    pub fn set_ip_address<S>(&mut self, ip_address: impl Into<Option<S>>) -> &mut Self
    where
        S: Into<String>,
    {
        self.ip_address = ip_address.into().map(Into::into);
        self
    }

    /// Set or clear the environment name.
    pub fn set_environment<S>(&mut self, environment: impl Into<Option<S>>) -> &mut Self
    where
        S: Into<String>,
    {
        self.environment = environment.into().map(Into::into);
        self
    }

    /// Set or clear the hostname.
    ///
    /// Stores under the reserved `hostname` custom property key; clearing removes the property
    /// (silently), which re-enables the ambient-hostname fallback during resolution.
    pub fn set_hostname<S>(&mut self, hostname: impl Into<Option<S>>) -> &mut Self
    where
        S: Into<String>,
    {
        match hostname.into() {
            Some(hostname) => {
                self.properties
                    .insert(context_field::HOSTNAME.to_owned(), hostname.into());
            }
            None => {
                self.properties.remove(context_field::HOSTNAME);
            }
        }
        self
    }

    /// Set a custom property, replacing any previous value under the same (case-sensitive) name.
    pub fn set_custom_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Whether a custom property with the given name exists.
    pub fn has_custom_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// The value of the given custom property.
    ///
    /// Fails with [`Error::PropertyNotFound`] when the property does not exist — this is the
    /// fail-fast accessor for attributes the caller expects to be present. For a total lookup,
    /// use [`ContextResolver::find_value`](crate::ContextResolver::find_value).
    pub fn get_custom_property(&self, name: &str) -> Result<&str> {
        self.property(name).ok_or_else(|| Error::PropertyNotFound {
            name: name.to_owned(),
        })
    }

    /// Remove a custom property. Removing a property that does not exist is a no-op.
    pub fn remove_custom_property(&mut self, name: &str) -> &mut Self {
        self.properties.remove(name);
        self
    }

    /// Remove a custom property, failing with [`Error::PropertyNotFound`] when it does not exist.
    pub fn try_remove_custom_property(&mut self, name: &str) -> Result<&mut Self> {
        if self.properties.remove(name).is_none() {
            return Err(Error::PropertyNotFound {
                name: name.to_owned(),
            });
        }
        Ok(self)
    }

    /// Total custom-property lookup for the resolver.
    pub(crate) fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::Context;
    use crate::Error;

    #[test]
    fn custom_property_lifecycle() {
        let mut context = Context::new();
        assert!(!context.has_custom_property("k"));
        assert_eq!(
            context.get_custom_property("k"),
            Err(Error::PropertyNotFound { name: "k".into() })
        );

        context.set_custom_property("k", "v");
        assert!(context.has_custom_property("k"));
        assert_eq!(context.get_custom_property("k"), Ok("v"));

        context.remove_custom_property("k");
        assert!(!context.has_custom_property("k"));
        // second silent removal is still a no-op
        context.remove_custom_property("k");

        assert!(context.try_remove_custom_property("missing").is_err());
    }

    #[test]
    fn try_remove_existing_property_succeeds() {
        let mut context = Context::new();
        context.set_custom_property("k", "v");
        assert!(context.try_remove_custom_property("k").is_ok());
        assert!(!context.has_custom_property("k"));
    }

    #[test]
    fn setters_chain_and_clear() {
        let mut context = Context::new();
        context
            .set_user_id("u1")
            .set_session_id("s1")
            .set_ip_address("127.0.0.1")
            .set_environment("production");

        assert_eq!(context.user_id(), Some("u1"));
        assert_eq!(context.session_id(), Some("s1"));
        assert_eq!(context.ip_address(), Some("127.0.0.1"));
        assert_eq!(context.environment(), Some("production"));

        context.set_user_id::<String>(None);
        assert_eq!(context.user_id(), None);
    }

    #[test]
    fn hostname_is_a_reserved_custom_property() {
        let mut context = Context::new();
        assert_eq!(context.hostname(), None);

        context.set_hostname("web-1");
        assert_eq!(context.hostname(), Some("web-1"));
        assert!(context.has_custom_property("hostname"));
        assert_eq!(context.get_custom_property("hostname"), Ok("web-1"));

        // clearing an already-absent hostname stays silent
        context.set_hostname::<String>(None);
        context.set_hostname::<String>(None);
        assert_eq!(context.hostname(), None);
        assert!(!context.has_custom_property("hostname"));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let mut context = Context::new();
        context
            .set_user_id("u1")
            .set_ip_address("10.0.0.1")
            .set_custom_property("country", "SE");

        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userId": "u1",
                "remoteAddress": "10.0.0.1",
                "properties": {"country": "SE"},
            })
        );

        let roundtripped: Context = serde_json::from_value(json).unwrap();
        assert_eq!(roundtripped, context);
    }

    #[test]
    fn empty_context_serializes_to_empty_object() {
        let json = serde_json::to_value(Context::new()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
