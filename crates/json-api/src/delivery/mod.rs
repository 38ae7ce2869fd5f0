//! Delivery quoting and zone lookup endpoints.

pub(crate) mod errors;
mod handlers;

pub(crate) use handlers::*;
