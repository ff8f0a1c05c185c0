// Interface adapters: HTTP handlers, routes and wire payloads.

pub mod handlers;
pub mod protocol;
pub mod routes;
