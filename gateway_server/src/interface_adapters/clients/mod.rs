// Clients for communicating with external services.

pub mod backend;
