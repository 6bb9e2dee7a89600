//! Session endpoints: login and "who am I".

pub mod controller;
pub mod router;
pub mod service;
