pub mod auth;
pub mod delivery;
pub mod notification_service;
pub mod recipients;
pub mod reporting;
pub mod store;
