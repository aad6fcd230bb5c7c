use crate::type_tag::TypeTag;
use thiserror::Error;

/// Errors returned when reading from a [`TypedStore`](crate::TypedStore)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No entry exists under the requested key
    #[error("No entry with the name {0} exists")]
    NameNotFound(String),

    /// The entry exists but holds a different type than the one requested
    #[error("The requested type {requested} and the stored type {stored} must coincide")]
    TypeMismatch { requested: TypeTag, stored: TypeTag },

    /// Mutable access was requested for an entry inserted as a shared borrow
    #[error("Entry {key} aliases a read-only {type_tag} and cannot be borrowed mutably")]
    ReadOnlyAlias { key: String, type_tag: TypeTag },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let missing = StoreError::NameNotFound("velocity".to_string());
        assert_eq!(missing.to_string(), "No entry with the name velocity exists");

        let mismatch = StoreError::TypeMismatch {
            requested: TypeTag::of::<String>(),
            stored: TypeTag::of::<i32>(),
        };
        assert_eq!(
            mismatch.to_string(),
            format!(
                "The requested type {} and the stored type i32 must coincide",
                std::any::type_name::<String>()
            )
        );

        let read_only = StoreError::ReadOnlyAlias {
            key: "mesh".to_string(),
            type_tag: TypeTag::of::<u64>(),
        };
        assert_eq!(
            read_only.to_string(),
            "Entry mesh aliases a read-only u64 and cannot be borrowed mutably"
        );

        assert!(format!("{:?}", missing).contains("NameNotFound"));
    }
}
