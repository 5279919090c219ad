//! HTTP handlers

pub mod employees;
pub mod health;
pub mod leads;
pub mod webhook;
