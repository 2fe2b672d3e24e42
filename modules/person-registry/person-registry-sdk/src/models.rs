use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use time::OffsetDateTime;

/// Returned when a wire name does not match any variant of a closed type enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct ParseTypeError {
    pub kind: &'static str,
    pub value: String,
}

// ==================== Person ====================

/// A registered person. Owns its addresses and contact infos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Data for creating a new person. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
}

/// Partial update for a person; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

// ==================== Address ====================

/// Kind of an address. A person holds at most one address of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    Permanent,
    Temporary,
}

impl AddressType {
    pub const ALL: [Self; 2] = [Self::Permanent, Self::Temporary];

    /// Wire and storage name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Permanent => "PERMANENT",
            Self::Temporary => "TEMPORARY",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseTypeError {
                kind: "address type",
                value: s.to_owned(),
            })
    }
}

/// An address owned by exactly one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: i64,
    pub person_id: i64,
    pub address_type: AddressType,
    pub country: String,
    pub city: String,
    pub zip: String,
    pub street: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Data for attaching a new address to a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub address_type: AddressType,
    pub country: String,
    pub city: String,
    pub zip: String,
    pub street: String,
}

/// Partial update for an address. The type and owner are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressPatch {
    pub country: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub street: Option<String>,
}

// ==================== Contact info ====================

/// Kind of a contact information record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactInfoType {
    Email,
    Phone,
}

impl ContactInfoType {
    pub const ALL: [Self; 2] = [Self::Email, Self::Phone];

    /// Wire and storage name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
        }
    }
}

impl fmt::Display for ContactInfoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactInfoType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseTypeError {
                kind: "contact info type",
                value: s.to_owned(),
            })
    }
}

/// A contact information record (e-mail address, phone number) owned by a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub id: i64,
    pub person_id: i64,
    pub contact_type: ContactInfoType,
    pub value: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Data for attaching a new contact info to a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactInfo {
    pub contact_type: ContactInfoType,
    pub value: String,
}

/// Partial update for a contact info. The type and owner are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfoPatch {
    pub value: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn address_type_wire_names() {
        assert_eq!("PERMANENT".parse::<AddressType>(), Ok(AddressType::Permanent));
        assert_eq!(AddressType::Temporary.to_string(), "TEMPORARY");
        let err = "permanent".parse::<AddressType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown address type 'permanent'");
    }

    #[test]
    fn contact_info_type_wire_names() {
        assert_eq!("PHONE".parse::<ContactInfoType>(), Ok(ContactInfoType::Phone));
        assert_eq!(ContactInfoType::Email.to_string(), "EMAIL");
        assert!("FAX".parse::<ContactInfoType>().is_err());
    }
}
