use std::sync::Arc;

use axum::response::IntoResponse;
use axum::{Extension, Json};
use http::{StatusCode, header};
use tracing::info;

use crate::api::rest::dto::{
    ContactInfoPath, ContactInfoResponse, CreateContactInfoRequest, PersonPath,
    UpdateContactInfoRequest,
};
use crate::api::rest::error::{ApiResult, ErrorResponse};
use crate::api::rest::extract::{JsonBody, PathParams};
use crate::module::ConcreteAppServices;

/// List the contact infos of a person
#[utoipa::path(
    get,
    path = "/api/persons/{personId}/contactInfos",
    tag = "contact-infos",
    params(("personId" = i64, Path, description = "Person id")),
    responses(
        (status = 200, description = "Contact infos of the person", body = [ContactInfoResponse]),
        (status = 404, description = "Person not found", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(svc), fields(person.id = path.person_id))]
pub(crate) async fn list_contact_infos(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathParams(path): PathParams<PersonPath>,
) -> ApiResult<Json<Vec<ContactInfoResponse>>> {
    info!("GET /persons/{}/contactInfos called", path.person_id);

    let contact_infos = svc
        .contact_infos
        .list_contact_infos(path.person_id)
        .await?;
    Ok(Json(contact_infos.into_iter().map(Into::into).collect()))
}

/// Add a contact info to a person
#[utoipa::path(
    post,
    path = "/api/persons/{personId}/contactInfos",
    tag = "contact-infos",
    params(("personId" = i64, Path, description = "Person id")),
    request_body = CreateContactInfoRequest,
    responses(
        (status = 201, description = "Contact info created", body = ContactInfoResponse,
            headers(("Location" = String, description = "URI of the new contact info"))),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "Person not found", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(svc, req), fields(person.id = path.person_id))]
pub(crate) async fn add_contact_info(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathParams(path): PathParams<PersonPath>,
    JsonBody(req): JsonBody<CreateContactInfoRequest>,
) -> ApiResult<impl IntoResponse> {
    info!("POST /persons/{}/contactInfos called", path.person_id);

    let contact_info = svc
        .contact_infos
        .add_contact_info(path.person_id, req.into())
        .await?;
    let location = format!(
        "/persons/{}/contactInfos/{}",
        path.person_id, contact_info.id
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ContactInfoResponse::from(contact_info)),
    ))
}

/// Update the value of a contact info; the type cannot be changed
#[utoipa::path(
    put,
    path = "/api/persons/{personId}/contactInfos/{contactInfoId}",
    tag = "contact-infos",
    params(
        ("personId" = i64, Path, description = "Person id"),
        ("contactInfoId" = i64, Path, description = "Contact info id"),
    ),
    request_body = UpdateContactInfoRequest,
    responses(
        (status = 200, description = "Contact info updated", body = ContactInfoResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Contact info not found for this person", body = ErrorResponse),
    )
)]
#[tracing::instrument(
    skip(svc, req),
    fields(person.id = path.person_id, contact_info.id = path.contact_info_id)
)]
pub(crate) async fn update_contact_info(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathParams(path): PathParams<ContactInfoPath>,
    JsonBody(req): JsonBody<UpdateContactInfoRequest>,
) -> ApiResult<Json<ContactInfoResponse>> {
    info!(
        "PUT /persons/{}/contactInfos/{} called",
        path.person_id, path.contact_info_id
    );

    let contact_info = svc
        .contact_infos
        .update_contact_info(path.person_id, path.contact_info_id, req.into())
        .await?;
    Ok(Json(contact_info.into()))
}

/// Delete a contact info of a person
#[utoipa::path(
    delete,
    path = "/api/persons/{personId}/contactInfos/{contactInfoId}",
    tag = "contact-infos",
    params(
        ("personId" = i64, Path, description = "Person id"),
        ("contactInfoId" = i64, Path, description = "Contact info id"),
    ),
    responses(
        (status = 204, description = "Contact info deleted"),
        (status = 404, description = "Contact info not found for this person", body = ErrorResponse),
    )
)]
#[tracing::instrument(
    skip(svc),
    fields(person.id = path.person_id, contact_info.id = path.contact_info_id)
)]
pub(crate) async fn delete_contact_info(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathParams(path): PathParams<ContactInfoPath>,
) -> ApiResult<StatusCode> {
    info!(
        "DELETE /persons/{}/contactInfos/{} called",
        path.person_id, path.contact_info_id
    );

    svc.contact_infos
        .delete_contact_info(path.person_id, path.contact_info_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
