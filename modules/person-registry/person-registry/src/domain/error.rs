use person_registry_sdk::AddressType;
use thiserror::Error;

/// Status class of a domain failure; the REST layer maps it to an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NotFound,
    BadRequest,
    Internal,
}

/// Domain-specific errors using thiserror
///
/// The `Display` text of every non-internal variant is the message returned
/// to the caller as-is.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Person with id {id} not found")]
    PersonNotFound { id: i64 },

    #[error("Address with id {id} not found")]
    AddressNotFound { id: i64 },

    #[error("Contact information with id {id} not found")]
    ContactInfoNotFound { id: i64 },

    #[error("Address with id {address_id} does not belong to person {person_id}")]
    AddressNotOwned { address_id: i64, person_id: i64 },

    #[error("Contact information with id {contact_info_id} does not belong to person {person_id}")]
    ContactInfoNotOwned {
        contact_info_id: i64,
        person_id: i64,
    },

    #[error("Address with type {address_type} already exists for person {person_id}")]
    AddressTypeExists {
        address_type: AddressType,
        person_id: i64,
    },

    #[error("Invalid request body: {field} {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    #[must_use]
    pub fn person_not_found(id: i64) -> Self {
        Self::PersonNotFound { id }
    }

    #[must_use]
    pub fn address_not_found(id: i64) -> Self {
        Self::AddressNotFound { id }
    }

    #[must_use]
    pub fn contact_info_not_found(id: i64) -> Self {
        Self::ContactInfoNotFound { id }
    }

    #[must_use]
    pub fn address_not_owned(address_id: i64, person_id: i64) -> Self {
        Self::AddressNotOwned {
            address_id,
            person_id,
        }
    }

    #[must_use]
    pub fn contact_info_not_owned(contact_info_id: i64, person_id: i64) -> Self {
        Self::ContactInfoNotOwned {
            contact_info_id,
            person_id,
        }
    }

    #[must_use]
    pub fn address_type_exists(address_type: AddressType, person_id: i64) -> Self {
        Self::AddressTypeExists {
            address_type,
            person_id,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Ownership mismatches are reported as "not found" so that records of
    /// other persons stay invisible.
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::PersonNotFound { .. }
            | Self::AddressNotFound { .. }
            | Self::ContactInfoNotFound { .. }
            | Self::AddressNotOwned { .. }
            | Self::ContactInfoNotOwned { .. } => ErrorClass::NotFound,
            Self::AddressTypeExists { .. } | Self::Validation { .. } => ErrorClass::BadRequest,
            Self::Database { .. } => ErrorClass::Internal,
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::database(e.to_string())
    }
}
