//! Service layer for business logic
//!
//! Each service owns one slice of the domain and talks to the shared
//! storage backend; no service calls another service.

mod click_service;
mod link_service;
mod profile_service;
mod user_service;

pub use click_service::*;
pub use link_service::*;
pub use profile_service::*;
pub use user_service::*;
