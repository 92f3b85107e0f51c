//! Request and response types shared by the HTTP handlers

pub mod json;
mod response;

pub use json::Json;
