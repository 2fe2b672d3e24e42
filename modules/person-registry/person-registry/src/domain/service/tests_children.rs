#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use person_registry_sdk::{
    AddressPatch, AddressType, ContactInfoPatch, ContactInfoType, NewAddress, NewContactInfo,
    NewPerson, Person,
};

use crate::domain::error::{DomainError, ErrorClass};
use crate::domain::service::ServiceConfig;
use crate::module::ConcreteAppServices;
use crate::test_support::{build_services, inmem_db};
use tracing_test::traced_test;

async fn setup() -> (Arc<ConcreteAppServices>, Person) {
    let db = inmem_db().await;
    let services = build_services(db, &ServiceConfig::default());
    let person = services
        .persons
        .create_person(NewPerson {
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
        })
        .await
        .unwrap();
    (services, person)
}

fn address(address_type: AddressType) -> NewAddress {
    NewAddress {
        address_type,
        country: "Germany".to_owned(),
        city: "Berlin".to_owned(),
        zip: "10115".to_owned(),
        street: "Invalidenstrasse 1".to_owned(),
    }
}

fn email(value: &str) -> NewContactInfo {
    NewContactInfo {
        contact_type: ContactInfoType::Email,
        value: value.to_owned(),
    }
}

// ==================== Addresses ====================

#[tokio::test]
async fn add_address_links_to_person() {
    let (services, person) = setup().await;

    let created = services
        .addresses
        .add_address(person.id, address(AddressType::Permanent))
        .await
        .unwrap();

    assert_eq!(created.person_id, person.id);
    assert_eq!(created.address_type, AddressType::Permanent);
    assert_eq!(created.created_at, created.updated_at);

    let listed = services.addresses.list_addresses(person.id).await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn add_address_to_unknown_person_is_not_found() {
    let (services, _) = setup().await;

    let err = services
        .addresses
        .add_address(77, address(AddressType::Permanent))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::PersonNotFound { id: 77 }));
}

#[tokio::test]
async fn second_address_of_same_type_is_rejected() {
    let (services, person) = setup().await;

    services
        .addresses
        .add_address(person.id, address(AddressType::Permanent))
        .await
        .unwrap();
    services
        .addresses
        .add_address(person.id, address(AddressType::Temporary))
        .await
        .unwrap();

    let err = services
        .addresses
        .add_address(person.id, address(AddressType::Permanent))
        .await
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::BadRequest);
    assert_eq!(
        err.to_string(),
        format!(
            "Address with type PERMANENT already exists for person {}",
            person.id
        )
    );
    assert_eq!(
        services
            .addresses
            .list_addresses(person.id)
            .await
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn add_address_rejects_blank_fields() {
    let (services, person) = setup().await;

    let mut blank_city = address(AddressType::Permanent);
    blank_city.city = String::new();

    let err = services
        .addresses
        .add_address(person.id, blank_city)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "city"));
}

#[tokio::test]
async fn update_address_keeps_type_and_created_at() {
    let (services, person) = setup().await;
    let created = services
        .addresses
        .add_address(person.id, address(AddressType::Temporary))
        .await
        .unwrap();

    let updated = services
        .addresses
        .update_address(
            person.id,
            created.id,
            AddressPatch {
                city: Some("Hamburg".to_owned()),
                zip: Some("20095".to_owned()),
                ..AddressPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.address_type, AddressType::Temporary);
    assert_eq!(updated.city, "Hamburg");
    assert_eq!(updated.zip, "20095");
    assert_eq!(updated.street, created.street);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn address_of_another_person_is_invisible() {
    let (services, owner) = setup().await;
    let stranger = services
        .persons
        .create_person(NewPerson {
            first_name: "John".to_owned(),
            last_name: "Smith".to_owned(),
        })
        .await
        .unwrap();
    let created = services
        .addresses
        .add_address(owner.id, address(AddressType::Permanent))
        .await
        .unwrap();

    let err = services
        .addresses
        .update_address(stranger.id, created.id, AddressPatch::default())
        .await
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::NotFound);

    let err = services
        .addresses
        .delete_address(stranger.id, created.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AddressNotOwned { .. }));

    // Still there for its owner.
    assert_eq!(
        services.addresses.list_addresses(owner.id).await.unwrap(),
        vec![created]
    );
}

#[tokio::test]
async fn delete_address_removes_it() {
    let (services, person) = setup().await;
    let created = services
        .addresses
        .add_address(person.id, address(AddressType::Permanent))
        .await
        .unwrap();

    services
        .addresses
        .delete_address(person.id, created.id)
        .await
        .unwrap();

    assert!(
        services
            .addresses
            .list_addresses(person.id)
            .await
            .unwrap()
            .is_empty()
    );
    let err = services
        .addresses
        .delete_address(person.id, created.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AddressNotFound { .. }));

    // The type slot is free again.
    services
        .addresses
        .add_address(person.id, address(AddressType::Permanent))
        .await
        .unwrap();
}

// ==================== Contact infos ====================

#[tokio::test]
async fn contact_infos_allow_duplicates_per_type() {
    let (services, person) = setup().await;

    let first = services
        .contact_infos
        .add_contact_info(person.id, email("jane@example.com"))
        .await
        .unwrap();
    let second = services
        .contact_infos
        .add_contact_info(person.id, email("jane.doe@example.com"))
        .await
        .unwrap();

    let listed = services
        .contact_infos
        .list_contact_infos(person.id)
        .await
        .unwrap();
    assert_eq!(listed, vec![first, second]);
}

#[tokio::test]
async fn list_contact_infos_of_unknown_person_is_not_found() {
    let (services, _) = setup().await;

    let err = services
        .contact_infos
        .list_contact_infos(404)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::PersonNotFound { id: 404 }));
}

#[tokio::test]
async fn contact_info_value_is_bounded() {
    let db = inmem_db().await;
    let services = build_services(
        db,
        &ServiceConfig {
            max_text_length: 10,
        },
    );
    let person = services
        .persons
        .create_person(NewPerson {
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
        })
        .await
        .unwrap();

    let err = services
        .contact_infos
        .add_contact_info(person.id, email("jane@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "value"));
}

#[tokio::test]
async fn update_contact_info_changes_value_only() {
    let (services, person) = setup().await;
    let created = services
        .contact_infos
        .add_contact_info(
            person.id,
            NewContactInfo {
                contact_type: ContactInfoType::Phone,
                value: "+43 1 234".to_owned(),
            },
        )
        .await
        .unwrap();

    let updated = services
        .contact_infos
        .update_contact_info(
            person.id,
            created.id,
            ContactInfoPatch {
                value: Some("+43 1 999".to_owned()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.contact_type, ContactInfoType::Phone);
    assert_eq!(updated.value, "+43 1 999");
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn contact_info_of_another_person_is_invisible() {
    let (services, owner) = setup().await;
    let created = services
        .contact_infos
        .add_contact_info(owner.id, email("jane@example.com"))
        .await
        .unwrap();

    let other = services
        .persons
        .create_person(NewPerson {
            first_name: "John".to_owned(),
            last_name: "Roe".to_owned(),
        })
        .await
        .unwrap();
    let expected = format!(
        "Contact information with id {} does not belong to person {}",
        created.id, other.id
    );

    let err = services
        .contact_infos
        .update_contact_info(
            other.id,
            created.id,
            ContactInfoPatch {
                value: Some("john@example.com".to_owned()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ContactInfoNotOwned { .. }));
    assert_eq!(err.class(), ErrorClass::NotFound);
    assert_eq!(err.to_string(), expected);

    let err = services
        .contact_infos
        .delete_contact_info(other.id, created.id)
        .await
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::NotFound);
    assert_eq!(err.to_string(), expected);

    let remaining = services
        .contact_infos
        .list_contact_infos(owner.id)
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, created.id);
    assert_eq!(remaining[0].value, "jane@example.com");
}

#[tokio::test]
async fn delete_unknown_contact_info_is_not_found() {
    let (services, person) = setup().await;

    let err = services
        .contact_infos
        .delete_contact_info(person.id, 5)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ContactInfoNotFound { id: 5 }));
}

// ==================== Tracing ====================

#[tokio::test]
#[traced_test]
async fn child_spans_record_ids() {
    let (services, person) = setup().await;
    let created = services
        .addresses
        .add_address(person.id, address(AddressType::Permanent))
        .await
        .unwrap();

    services
        .addresses
        .delete_address(person.id, created.id)
        .await
        .unwrap();
    assert!(logs_contain(&format!(
        "delete_address{{person_id={} address_id={}}}",
        person.id, created.id
    )));

    let _ = services.contact_infos.list_contact_infos(4242).await;
    assert!(logs_contain("list_contact_infos{person_id=4242}"));
}
