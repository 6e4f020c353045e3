//! API handlers for the timer diary REST endpoints

pub mod dates;
pub mod health;
pub mod logs;
pub mod openapi;
