/// Represents a result type for operations in the toggle SDK core.
///
/// This `Result` type is a standard Rust `Result` type where the error variant is defined by the
/// crate-specific [`Error`] enum.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum representing possible errors that can occur in the toggle SDK core.
///
/// Absent data normally resolves to an explicit "no value" rather than an error, so this enum is
/// small: only the fail-fast custom-property accessors can fail, and nothing here is fatal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested custom context property does not exist.
    ///
    /// Raised only by [`Context::get_custom_property`](crate::Context::get_custom_property) and
    /// [`Context::try_remove_custom_property`](crate::Context::try_remove_custom_property).
    /// Callers that want a non-failing lookup should use
    /// [`ContextResolver::find_value`](crate::ContextResolver::find_value) or
    /// [`Context::has_custom_property`](crate::Context::has_custom_property) instead.
    #[error("the custom context value '{name}' does not exist")]
    PropertyNotFound {
        /// Name of the missing property.
        name: String,
    },
}
