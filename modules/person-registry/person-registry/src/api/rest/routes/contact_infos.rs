use axum::Router;
use axum::routing::{get, put};

use crate::api::rest::handlers::contact_infos;

pub(super) fn register_contact_info_routes(router: Router) -> Router {
    router
        // GET|POST /api/persons/{personId}/contactInfos
        .route(
            "/api/persons/{personId}/contactInfos",
            get(contact_infos::list_contact_infos).post(contact_infos::add_contact_info),
        )
        // PUT|DELETE /api/persons/{personId}/contactInfos/{contactInfoId}
        .route(
            "/api/persons/{personId}/contactInfos/{contactInfoId}",
            put(contact_infos::update_contact_info).delete(contact_infos::delete_contact_info),
        )
}
