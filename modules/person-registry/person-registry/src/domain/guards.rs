//! Validation and ownership rules.
//!
//! Every guard is a pure precondition check: it inspects data the service has
//! already loaded and fails fast with a [`DomainError`] before any store
//! mutation happens.

use person_registry_sdk::{
    Address, AddressPatch, AddressType, ContactInfo, ContactInfoPatch, NewAddress,
    NewContactInfo, NewPerson, PersonPatch,
};

use super::error::DomainError;

pub fn ensure_person_exists(person_id: i64, exists: bool) -> Result<(), DomainError> {
    if exists {
        Ok(())
    } else {
        Err(DomainError::person_not_found(person_id))
    }
}

pub fn ensure_address_belongs_to(address: &Address, person_id: i64) -> Result<(), DomainError> {
    if address.person_id == person_id {
        Ok(())
    } else {
        Err(DomainError::address_not_owned(address.id, person_id))
    }
}

pub fn ensure_contact_info_belongs_to(
    contact_info: &ContactInfo,
    person_id: i64,
) -> Result<(), DomainError> {
    if contact_info.person_id == person_id {
        Ok(())
    } else {
        Err(DomainError::contact_info_not_owned(contact_info.id, person_id))
    }
}

/// A person may hold at most one address per type.
pub fn ensure_address_type_unique(
    person_id: i64,
    existing: &[Address],
    candidate: AddressType,
) -> Result<(), DomainError> {
    if existing.iter().any(|a| a.address_type == candidate) {
        return Err(DomainError::address_type_exists(candidate, person_id));
    }
    Ok(())
}

/// Field-level input rules. Field names are reported in their wire form.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub max_text_length: usize,
}

impl FieldRules {
    pub fn new_person(self, new_person: &NewPerson) -> Result<(), DomainError> {
        self.bounded("firstName", &new_person.first_name)?;
        self.bounded("lastName", &new_person.last_name)
    }

    pub fn person_patch(self, patch: &PersonPatch) -> Result<(), DomainError> {
        if let Some(first_name) = &patch.first_name {
            self.bounded("firstName", first_name)?;
        }
        if let Some(last_name) = &patch.last_name {
            self.bounded("lastName", last_name)?;
        }
        Ok(())
    }

    pub fn new_address(self, new_address: &NewAddress) -> Result<(), DomainError> {
        self.bounded("country", &new_address.country)?;
        self.bounded("city", &new_address.city)?;
        self.bounded("zip", &new_address.zip)?;
        self.bounded("street", &new_address.street)
    }

    pub fn address_patch(self, patch: &AddressPatch) -> Result<(), DomainError> {
        for (field, value) in [
            ("country", &patch.country),
            ("city", &patch.city),
            ("zip", &patch.zip),
            ("street", &patch.street),
        ] {
            if let Some(value) = value {
                self.bounded(field, value)?;
            }
        }
        Ok(())
    }

    pub fn new_contact_info(self, new_contact_info: &NewContactInfo) -> Result<(), DomainError> {
        self.bounded("value", &new_contact_info.value)
    }

    pub fn contact_info_patch(self, patch: &ContactInfoPatch) -> Result<(), DomainError> {
        match &patch.value {
            Some(value) => self.bounded("value", value),
            None => Ok(()),
        }
    }

    fn bounded(self, field: &str, value: &str) -> Result<(), DomainError> {
        not_blank(field, value)?;
        let len = value.chars().count();
        if len > self.max_text_length {
            return Err(DomainError::validation(
                field,
                format!(
                    "must be at most {} characters (got {len})",
                    self.max_text_length
                ),
            ));
        }
        Ok(())
    }
}

fn not_blank(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be blank"));
    }
    Ok(())
}
