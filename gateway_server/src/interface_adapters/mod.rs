// Interface adapters: HTTP handlers, proxying and backend clients.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod proxy;
pub mod routes;
pub mod state;
