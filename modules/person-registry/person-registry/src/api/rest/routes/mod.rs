//! Route table of the module.
//!
//! Besides the resource routes this mounts `/api/openapi.json`, `/health`
//! and the two fallbacks that keep unknown routes and unsupported methods on
//! the common error body.

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Json, Router};
use http::{Method, Uri};
use utoipa::OpenApi;

use crate::api::rest::error::ApiError;
use crate::api::rest::{dto, error, handlers};
use crate::module::ConcreteAppServices;

mod addresses;
mod contact_infos;
mod persons;

#[derive(OpenApi)]
#[openapi(
    info(title = "Person Registry API", description = "Persons with their addresses and contact infos"),
    paths(
        handlers::persons::list_persons,
        handlers::persons::get_person,
        handlers::persons::create_person,
        handlers::persons::update_person,
        handlers::persons::delete_person,
        handlers::addresses::list_addresses,
        handlers::addresses::add_address,
        handlers::addresses::update_address,
        handlers::addresses::delete_address,
        handlers::contact_infos::list_contact_infos,
        handlers::contact_infos::add_contact_info,
        handlers::contact_infos::update_contact_info,
        handlers::contact_infos::delete_contact_info,
        handlers::health,
    ),
    components(schemas(
        dto::PersonResponse,
        dto::CreatePersonRequest,
        dto::UpdatePersonRequest,
        dto::AddressTypeDto,
        dto::AddressResponse,
        dto::CreateAddressRequest,
        dto::UpdateAddressRequest,
        dto::ContactInfoTypeDto,
        dto::ContactInfoResponse,
        dto::CreateContactInfoRequest,
        dto::UpdateContactInfoRequest,
        error::ErrorResponse,
    )),
    tags(
        (name = "persons", description = "Person management"),
        (name = "addresses", description = "Addresses of a person"),
        (name = "contact-infos", description = "Contact infos of a person"),
    )
)]
pub struct ApiDoc;

pub fn register_routes(router: Router, services: Arc<ConcreteAppServices>) -> Router {
    let api = Router::new();
    let api = persons::register_person_routes(api);
    let api = addresses::register_address_routes(api);
    let api = contact_infos::register_contact_info_routes(api);

    router
        .merge(api.layer(Extension(services)))
        .route("/api/openapi.json", get(openapi_json))
        .route("/health", get(handlers::health))
        .fallback(no_endpoint)
        .method_not_allowed_fallback(method_not_supported)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[allow(clippy::needless_pass_by_value)] // axum extractors are taken by value
async fn no_endpoint(method: Method, uri: Uri) -> ApiError {
    ApiError::no_endpoint(&method, uri.path())
}

#[allow(clippy::needless_pass_by_value)] // axum extractors are taken by value
async fn method_not_supported(method: Method) -> ApiError {
    ApiError::method_not_supported(&method)
}
