use std::sync::Arc;

use axum::response::IntoResponse;
use axum::{Extension, Json};
use http::{StatusCode, header};
use tracing::info;

use crate::api::rest::dto::{
    CreatePersonRequest, PersonPath, PersonResponse, UpdatePersonRequest,
};
use crate::api::rest::error::{ApiResult, ErrorResponse};
use crate::api::rest::extract::{JsonBody, PathParams};
use crate::module::ConcreteAppServices;

/// List all persons
#[utoipa::path(
    get,
    path = "/api/persons",
    tag = "persons",
    responses(
        (status = 200, description = "All persons", body = [PersonResponse]),
        (status = 500, description = "Unexpected error", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(svc))]
pub(crate) async fn list_persons(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
) -> ApiResult<Json<Vec<PersonResponse>>> {
    info!("GET /persons called");

    let persons = svc.persons.list_persons().await?;
    Ok(Json(persons.into_iter().map(Into::into).collect()))
}

/// Get a person by id
#[utoipa::path(
    get,
    path = "/api/persons/{personId}",
    tag = "persons",
    params(("personId" = i64, Path, description = "Person id")),
    responses(
        (status = 200, description = "Person found", body = PersonResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Person not found", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(svc), fields(person.id = path.person_id))]
pub(crate) async fn get_person(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathParams(path): PathParams<PersonPath>,
) -> ApiResult<Json<PersonResponse>> {
    info!("GET /persons/{} called", path.person_id);

    let person = svc.persons.get_person(path.person_id).await?;
    Ok(Json(person.into()))
}

/// Create a person
#[utoipa::path(
    post,
    path = "/api/persons",
    tag = "persons",
    request_body = CreatePersonRequest,
    responses(
        (status = 201, description = "Person created", body = PersonResponse,
            headers(("Location" = String, description = "URI of the new person"))),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(svc, req))]
pub(crate) async fn create_person(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    JsonBody(req): JsonBody<CreatePersonRequest>,
) -> ApiResult<impl IntoResponse> {
    info!("POST /persons called");

    let person = svc.persons.create_person(req.into()).await?;
    let location = format!("/api/persons/{}", person.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(PersonResponse::from(person)),
    ))
}

/// Update a person; absent fields are left unchanged
#[utoipa::path(
    put,
    path = "/api/persons/{personId}",
    tag = "persons",
    params(("personId" = i64, Path, description = "Person id")),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, description = "Person updated", body = PersonResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Person not found", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(svc, req), fields(person.id = path.person_id))]
pub(crate) async fn update_person(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathParams(path): PathParams<PersonPath>,
    JsonBody(req): JsonBody<UpdatePersonRequest>,
) -> ApiResult<Json<PersonResponse>> {
    info!("PUT /persons/{} called", path.person_id);

    let person = svc
        .persons
        .update_person(path.person_id, req.into())
        .await?;
    Ok(Json(person.into()))
}

/// Delete a person with all of its addresses and contact infos
#[utoipa::path(
    delete,
    path = "/api/persons/{personId}",
    tag = "persons",
    params(("personId" = i64, Path, description = "Person id")),
    responses(
        (status = 204, description = "Person deleted or already absent"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(svc), fields(person.id = path.person_id))]
pub(crate) async fn delete_person(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    PathParams(path): PathParams<PersonPath>,
) -> ApiResult<StatusCode> {
    info!("DELETE /persons/{} called", path.person_id);

    svc.persons.delete_person(path.person_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
