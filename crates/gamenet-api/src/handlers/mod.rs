//! HTTP request handlers

pub mod grid;
pub mod health;
pub mod payments;
pub mod subscriptions;
