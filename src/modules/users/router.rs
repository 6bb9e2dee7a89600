use axum::{Router, routing::post};

use crate::modules::users::controller::register_user;
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/", post(register_user))
}
