use axum::Router;
use axum::routing::{get, put};

use crate::api::rest::handlers::addresses;

pub(super) fn register_address_routes(router: Router) -> Router {
    router
        // GET|POST /api/persons/{personId}/addresses
        .route(
            "/api/persons/{personId}/addresses",
            get(addresses::list_addresses).post(addresses::add_address),
        )
        // PUT|DELETE /api/persons/{personId}/addresses/{addressId}
        .route(
            "/api/persons/{personId}/addresses/{addressId}",
            put(addresses::update_address).delete(addresses::delete_address),
        )
}
