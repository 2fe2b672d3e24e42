pub mod address;
pub mod contact_info;
pub mod person;
