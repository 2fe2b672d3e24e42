//! Row to contract conversions.
//!
//! Type columns hold free text, so reading a row back can fail when the
//! stored name is not a known variant. That is reported as a storage fault.

use person_registry_sdk::{Address, AddressType, ContactInfo, ContactInfoType, Person};

use crate::domain::error::DomainError;
use crate::infra::storage::entity::{address, contact_info, person};

impl From<person::Model> for Person {
    fn from(m: person::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl TryFrom<address::Model> for Address {
    type Error = DomainError;

    fn try_from(m: address::Model) -> Result<Self, Self::Error> {
        let address_type: AddressType = m
            .address_type
            .parse()
            .map_err(|e| DomainError::database(format!("address {}: {e}", m.id)))?;

        Ok(Self {
            id: m.id,
            person_id: m.person_id,
            address_type,
            country: m.country,
            city: m.city,
            zip: m.zip,
            street: m.street,
            created_at: m.created_at,
            updated_at: m.updated_at,
        })
    }
}

impl TryFrom<contact_info::Model> for ContactInfo {
    type Error = DomainError;

    fn try_from(m: contact_info::Model) -> Result<Self, Self::Error> {
        let contact_type: ContactInfoType = m
            .contact_type
            .parse()
            .map_err(|e| DomainError::database(format!("contact info {}: {e}", m.id)))?;

        Ok(Self {
            id: m.id,
            person_id: m.person_id,
            contact_type,
            value: m.value,
            created_at: m.created_at,
            updated_at: m.updated_at,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use time::OffsetDateTime;

    use super::*;

    fn address_row(address_type: &str) -> address::Model {
        let now = OffsetDateTime::now_utc();
        address::Model {
            id: 5,
            person_id: 1,
            address_type: address_type.to_owned(),
            country: "Germany".to_owned(),
            city: "Berlin".to_owned(),
            zip: "10115".to_owned(),
            street: "Invalidenstrasse 1".to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn address_row_with_known_type_maps() {
        let address = Address::try_from(address_row("TEMPORARY"));
        assert!(matches!(
            address,
            Ok(Address {
                address_type: AddressType::Temporary,
                ..
            })
        ));
    }

    #[test]
    fn unknown_stored_type_is_a_storage_fault() {
        let err = Address::try_from(address_row("HOLIDAY")).unwrap_err();
        assert!(matches!(err, DomainError::Database { .. }));
        assert!(err.to_string().contains("HOLIDAY"));
    }
}
