//! Wire types. JSON keys are `camelCase` and timestamps are RFC 3339.
//!
//! Conversions to and from the SDK models are plain field copies; fields a
//! request may not set (id, type on update, timestamps) simply do not exist
//! on the request types.

use person_registry_sdk::{
    Address, AddressPatch, AddressType, ContactInfo, ContactInfoPatch, ContactInfoType,
    NewAddress, NewContactInfo, NewPerson, Person, PersonPatch,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

// ==================== Person ====================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

// ==================== Address ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressTypeDto {
    Permanent,
    Temporary,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub address_type: AddressTypeDto,
    pub country: String,
    pub city: String,
    pub zip: String,
    pub street: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressRequest {
    #[serde(rename = "type")]
    pub address_type: AddressTypeDto,
    pub country: String,
    pub city: String,
    pub zip: String,
    pub street: String,
}

/// Partial update; the address type cannot be changed.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAddressRequest {
    pub country: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub street: Option<String>,
}

// ==================== Contact info ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactInfoTypeDto {
    Email,
    Phone,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub contact_type: ContactInfoTypeDto,
    pub value: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactInfoRequest {
    #[serde(rename = "type")]
    pub contact_type: ContactInfoTypeDto,
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactInfoRequest {
    pub value: Option<String>,
}

// ==================== Path parameters ====================

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPath {
    pub person_id: i64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPath {
    pub person_id: i64,
    pub address_id: i64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoPath {
    pub person_id: i64,
    pub contact_info_id: i64,
}

// ==================== Conversions ====================

impl From<Person> for PersonResponse {
    fn from(p: Person) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<CreatePersonRequest> for NewPerson {
    fn from(req: CreatePersonRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

impl From<UpdatePersonRequest> for PersonPatch {
    fn from(req: UpdatePersonRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

impl From<AddressType> for AddressTypeDto {
    fn from(t: AddressType) -> Self {
        match t {
            AddressType::Permanent => Self::Permanent,
            AddressType::Temporary => Self::Temporary,
        }
    }
}

impl From<AddressTypeDto> for AddressType {
    fn from(t: AddressTypeDto) -> Self {
        match t {
            AddressTypeDto::Permanent => Self::Permanent,
            AddressTypeDto::Temporary => Self::Temporary,
        }
    }
}

impl From<Address> for AddressResponse {
    fn from(a: Address) -> Self {
        Self {
            id: a.id,
            address_type: a.address_type.into(),
            country: a.country,
            city: a.city,
            zip: a.zip,
            street: a.street,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

impl From<CreateAddressRequest> for NewAddress {
    fn from(req: CreateAddressRequest) -> Self {
        Self {
            address_type: req.address_type.into(),
            country: req.country,
            city: req.city,
            zip: req.zip,
            street: req.street,
        }
    }
}

impl From<UpdateAddressRequest> for AddressPatch {
    fn from(req: UpdateAddressRequest) -> Self {
        Self {
            country: req.country,
            city: req.city,
            zip: req.zip,
            street: req.street,
        }
    }
}

impl From<ContactInfoType> for ContactInfoTypeDto {
    fn from(t: ContactInfoType) -> Self {
        match t {
            ContactInfoType::Email => Self::Email,
            ContactInfoType::Phone => Self::Phone,
        }
    }
}

impl From<ContactInfoTypeDto> for ContactInfoType {
    fn from(t: ContactInfoTypeDto) -> Self {
        match t {
            ContactInfoTypeDto::Email => Self::Email,
            ContactInfoTypeDto::Phone => Self::Phone,
        }
    }
}

impl From<ContactInfo> for ContactInfoResponse {
    fn from(c: ContactInfo) -> Self {
        Self {
            id: c.id,
            contact_type: c.contact_type.into(),
            value: c.value,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

impl From<CreateContactInfoRequest> for NewContactInfo {
    fn from(req: CreateContactInfoRequest) -> Self {
        Self {
            contact_type: req.contact_type.into(),
            value: req.value,
        }
    }
}

impl From<UpdateContactInfoRequest> for ContactInfoPatch {
    fn from(req: UpdateContactInfoRequest) -> Self {
        Self { value: req.value }
    }
}
