#![allow(clippy::unwrap_used, clippy::expect_used)]

use person_registry_sdk::{
    AddressType, ContactInfoType, NewAddress, NewContactInfo, NewPerson, PersonPatch,
};

use crate::domain::error::{DomainError, ErrorClass};
use crate::domain::service::ServiceConfig;
use crate::test_support::{build_services, inmem_db};

fn jane() -> NewPerson {
    NewPerson {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
    }
}

#[tokio::test]
async fn create_person_assigns_id_and_equal_timestamps() {
    let db = inmem_db().await;
    let services = build_services(db, &ServiceConfig::default());

    let person = services.persons.create_person(jane()).await.unwrap();

    assert!(person.id > 0);
    assert_eq!(person.first_name, "Jane");
    assert_eq!(person.last_name, "Doe");
    assert_eq!(person.created_at, person.updated_at);

    let fetched = services.persons.get_person(person.id).await.unwrap();
    assert_eq!(fetched, person);
}

#[tokio::test]
async fn list_persons_in_creation_order() {
    let db = inmem_db().await;
    let services = build_services(db, &ServiceConfig::default());

    assert!(services.persons.list_persons().await.unwrap().is_empty());

    let first = services.persons.create_person(jane()).await.unwrap();
    let second = services
        .persons
        .create_person(NewPerson {
            first_name: "John".to_owned(),
            last_name: "Smith".to_owned(),
        })
        .await
        .unwrap();

    let ids: Vec<i64> = services
        .persons
        .list_persons()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn get_unknown_person_is_not_found() {
    let db = inmem_db().await;
    let services = build_services(db, &ServiceConfig::default());

    let err = services.persons.get_person(42).await.unwrap_err();
    assert_eq!(err.class(), ErrorClass::NotFound);
    assert_eq!(err.to_string(), "Person with id 42 not found");
}

#[tokio::test]
async fn create_person_rejects_blank_and_long_names() {
    let db = inmem_db().await;
    let services = build_services(
        db,
        &ServiceConfig {
            max_text_length: 5,
        },
    );

    let blank = services
        .persons
        .create_person(NewPerson {
            first_name: "  ".to_owned(),
            last_name: "Doe".to_owned(),
        })
        .await
        .unwrap_err();
    assert!(matches!(blank, DomainError::Validation { ref field, .. } if field == "firstName"));

    let long = services
        .persons
        .create_person(NewPerson {
            first_name: "Jane".to_owned(),
            last_name: "Doe-Smithson".to_owned(),
        })
        .await
        .unwrap_err();
    assert!(matches!(long, DomainError::Validation { ref field, .. } if field == "lastName"));

    assert!(services.persons.list_persons().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_person_applies_patch_and_bumps_updated_at() {
    let db = inmem_db().await;
    let services = build_services(db, &ServiceConfig::default());
    let person = services.persons.create_person(jane()).await.unwrap();

    let updated = services
        .persons
        .update_person(
            person.id,
            PersonPatch {
                first_name: None,
                last_name: Some("Roe".to_owned()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, person.id);
    assert_eq!(updated.first_name, "Jane");
    assert_eq!(updated.last_name, "Roe");
    assert_eq!(updated.created_at, person.created_at);
    assert!(updated.updated_at >= person.updated_at);

    let fetched = services.persons.get_person(person.id).await.unwrap();
    assert_eq!(fetched.last_name, "Roe");
}

#[tokio::test]
async fn update_unknown_person_is_not_found() {
    let db = inmem_db().await;
    let services = build_services(db, &ServiceConfig::default());

    let err = services
        .persons
        .update_person(9, PersonPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::PersonNotFound { id: 9 }));
}

#[tokio::test]
async fn delete_person_cascades_to_children() {
    let db = inmem_db().await;
    let services = build_services(db, &ServiceConfig::default());
    let person = services.persons.create_person(jane()).await.unwrap();
    let other = services.persons.create_person(jane()).await.unwrap();

    for p in [&person, &other] {
        services
            .addresses
            .add_address(
                p.id,
                NewAddress {
                    address_type: AddressType::Permanent,
                    country: "Austria".to_owned(),
                    city: "Vienna".to_owned(),
                    zip: "1010".to_owned(),
                    street: "Ring 1".to_owned(),
                },
            )
            .await
            .unwrap();
        services
            .contact_infos
            .add_contact_info(
                p.id,
                NewContactInfo {
                    contact_type: ContactInfoType::Email,
                    value: "jane@example.com".to_owned(),
                },
            )
            .await
            .unwrap();
    }

    services.persons.delete_person(person.id).await.unwrap();

    assert!(matches!(
        services.persons.get_person(person.id).await,
        Err(DomainError::PersonNotFound { .. })
    ));
    assert!(matches!(
        services.addresses.list_addresses(person.id).await,
        Err(DomainError::PersonNotFound { .. })
    ));

    // Children of other persons are untouched.
    assert_eq!(
        services.addresses.list_addresses(other.id).await.unwrap().len(),
        1
    );
    assert_eq!(
        services
            .contact_infos
            .list_contact_infos(other.id)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn delete_unknown_person_succeeds() {
    let db = inmem_db().await;
    let services = build_services(db, &ServiceConfig::default());

    services.persons.delete_person(1234).await.unwrap();
}
