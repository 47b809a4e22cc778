use thiserror::Error;

/// A search request that cannot be executed as given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more ordering fields are not sortable on this resource.
    ///
    /// Only raised by resources using the reject ordering policy. Every offending
    /// field is named, in request order.
    #[error("Invalid ordering field(s): {}", .0.join(", "))]
    UnknownOrderingFields(Vec<String>),

    /// Page size is not acceptable for this resource.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(i64),

    /// An advanced-search field carries a value the resource cannot interpret.
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidFieldValue {
        /// External name of the field
        field: String,
        /// Raw value as received
        value: String,
    },
}
