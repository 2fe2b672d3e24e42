use axum::Router;
use axum::routing::get;

use crate::api::rest::handlers::persons;

pub(super) fn register_person_routes(router: Router) -> Router {
    router
        // GET|POST /api/persons
        .route(
            "/api/persons",
            get(persons::list_persons).post(persons::create_person),
        )
        // GET|PUT|DELETE /api/persons/{personId}
        .route(
            "/api/persons/{personId}",
            get(persons::get_person)
                .put(persons::update_person)
                .delete(persons::delete_person),
        )
}
