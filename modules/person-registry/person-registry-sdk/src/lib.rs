//! Person Registry SDK
//!
//! Contract types shared by the `person-registry` module and its consumers:
//! the `Person`, `Address` and `ContactInfo` models, their creation and patch
//! payloads, and the closed type enums with their wire names.

pub mod models;

pub use models::{
    Address, AddressPatch, AddressType, ContactInfo, ContactInfoPatch, ContactInfoType,
    NewAddress, NewContactInfo, NewPerson, ParseTypeError, Person, PersonPatch,
};
