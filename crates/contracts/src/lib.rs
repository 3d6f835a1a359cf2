//! Shared contracts between the asset inventory frontend and the REST backend.
//!
//! - `domain` — DTOs and form models, one module per aggregate (a0xx)
//! - `dashboards` — reporting payloads (d4xx)
//! - `shared` — response envelope, validation errors, entity UI metadata

pub mod dashboards;
pub mod domain;
pub mod shared;
