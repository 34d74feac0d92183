//! Request/response DTOs.

pub mod catalog;
pub mod health;
pub mod inquiry;
