//! # CRM API
//!
//! HTTP handlers, DTOs, session extraction, and the response envelope.

pub mod dto;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod session;
pub mod state;
