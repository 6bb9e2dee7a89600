//! Posts, likes and comments. Every route requires a token.

pub mod controller;
pub mod router;
pub mod service;
