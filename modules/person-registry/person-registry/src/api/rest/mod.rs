//! REST surface of the module: DTOs, extractors, handlers, error mapping
//! and the route table.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
