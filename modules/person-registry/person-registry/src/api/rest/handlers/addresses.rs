use std::sync::Arc;

use axum::response::IntoResponse;
use axum::{Extension, Json};
use http::{StatusCode, header};
use tracing::info;

use crate::api::rest::dto::{
    AddressPath, AddressResponse, CreateAddressRequest, PersonPath, UpdateAddressRequest,
};
use crate::api::rest::error::{ApiResult, ErrorResponse};
use crate::api::rest::extract::{JsonBody, PathParams};
use crate::module::ConcreteAppServices;

/// List the addresses of a person
#[utoipa::path(
    get,
    path = "/api/persons/{personId}/addresses",
    tag = "addresses",
    params(("personId" = i64, Path, description = "Person id")),
    responses(
        (status = 200, description = "Addresses of the person", body = [AddressResponse]),
        (status = 404, description = "Person not found", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(svc), fields(person.id = path.person_id))]
pub(crate) async fn list_addresses(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathParams(path): PathParams<PersonPath>,
) -> ApiResult<Json<Vec<AddressResponse>>> {
    info!("GET /persons/{}/addresses called", path.person_id);

    let addresses = svc.addresses.list_addresses(path.person_id).await?;
    Ok(Json(addresses.into_iter().map(Into::into).collect()))
}

/// Add an address to a person; at most one address per type
#[utoipa::path(
    post,
    path = "/api/persons/{personId}/addresses",
    tag = "addresses",
    params(("personId" = i64, Path, description = "Person id")),
    request_body = CreateAddressRequest,
    responses(
        (status = 201, description = "Address created", body = AddressResponse,
            headers(("Location" = String, description = "URI of the new address"))),
        (status = 400, description = "Invalid request or duplicate type", body = ErrorResponse),
        (status = 404, description = "Person not found", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(svc, req), fields(person.id = path.person_id))]
pub(crate) async fn add_address(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathParams(path): PathParams<PersonPath>,
    JsonBody(req): JsonBody<CreateAddressRequest>,
) -> ApiResult<impl IntoResponse> {
    info!("POST /persons/{}/addresses called", path.person_id);

    let address = svc
        .addresses
        .add_address(path.person_id, req.into())
        .await?;
    let location = format!("/persons/{}/addresses/{}", path.person_id, address.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AddressResponse::from(address)),
    ))
}

/// Update an address of a person; the type cannot be changed
#[utoipa::path(
    put,
    path = "/api/persons/{personId}/addresses/{addressId}",
    tag = "addresses",
    params(
        ("personId" = i64, Path, description = "Person id"),
        ("addressId" = i64, Path, description = "Address id"),
    ),
    request_body = UpdateAddressRequest,
    responses(
        (status = 200, description = "Address updated", body = AddressResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Address not found for this person", body = ErrorResponse),
    )
)]
#[tracing::instrument(
    skip(svc, req),
    fields(person.id = path.person_id, address.id = path.address_id)
)]
pub(crate) async fn update_address(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathParams(path): PathParams<AddressPath>,
    JsonBody(req): JsonBody<UpdateAddressRequest>,
) -> ApiResult<Json<AddressResponse>> {
    info!(
        "PUT /persons/{}/addresses/{} called",
        path.person_id, path.address_id
    );

    let address = svc
        .addresses
        .update_address(path.person_id, path.address_id, req.into())
        .await?;
    Ok(Json(address.into()))
}

/// Delete an address of a person
#[utoipa::path(
    delete,
    path = "/api/persons/{personId}/addresses/{addressId}",
    tag = "addresses",
    params(
        ("personId" = i64, Path, description = "Person id"),
        ("addressId" = i64, Path, description = "Address id"),
    ),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 404, description = "Address not found for this person", body = ErrorResponse),
    )
)]
#[tracing::instrument(
    skip(svc),
    fields(person.id = path.person_id, address.id = path.address_id)
)]
pub(crate) async fn delete_address(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathParams(path): PathParams<AddressPath>,
) -> ApiResult<StatusCode> {
    info!(
        "DELETE /persons/{}/addresses/{} called",
        path.person_id, path.address_id
    );

    svc.addresses
        .delete_address(path.person_id, path.address_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
