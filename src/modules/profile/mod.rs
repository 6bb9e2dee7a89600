//! Developer profiles, education history and the GitHub repository proxy.

pub mod controller;
pub mod github;
pub mod router;
pub mod service;
