// Job application tracker: in-memory CRUD keyed by browser session.

pub mod handlers;
pub mod models;
pub mod store;
