//! Request extraction, session handling and identity guards used by the controllers.

pub mod auth;
pub mod gateway;
pub mod json;
pub mod session;

#[cfg(test)]
mod test;
