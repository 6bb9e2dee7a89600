//! Account registration.

pub mod controller;
pub mod router;
pub mod service;
