use axum::{Router, routing::get};

use super::controller::{get_current_user, login_user};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/", get(get_current_user).post(login_user))
}
