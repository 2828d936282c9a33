//! HTTP route handlers

pub mod catalog;
pub mod quiz;
pub mod score;
pub mod session;
