use axum::{
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{controller, state::AppState},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .merge(auth_routes())
        .merge(blog_routes())
        .merge(comment_routes())
        .merge(user_routes())
        .merge(admin_routes())
        .fallback(not_found)
}

fn auth_routes() -> Router<AppState> {
    use controller::auth;

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/auth/google", get(auth::google_login))
        .route("/api/auth/google/callback", get(auth::google_callback))
        .route("/api/auth/facebook", get(auth::facebook_login))
        .route("/api/auth/facebook/callback", get(auth::facebook_callback))
}

fn blog_routes() -> Router<AppState> {
    use controller::blog;

    Router::new()
        .route("/api/blogs", get(blog::list_blogs).post(blog::create_blog))
        .route("/api/blogs/my-blogs", get(blog::my_blogs))
        .route("/api/blogs/edit/{id}", get(blog::get_blog_for_edit))
        .route(
            "/api/blogs/{slug}",
            get(blog::get_blog_by_slug)
                .put(blog::update_blog)
                .delete(blog::delete_blog),
        )
        .route("/api/blogs/{slug}/like", post(blog::toggle_blog_like))
}

fn comment_routes() -> Router<AppState> {
    use controller::comment;

    Router::new()
        .route("/api/comments", post(comment::create_comment))
        .route(
            "/api/comments/{id}",
            get(comment::get_comments)
                .put(comment::update_comment)
                .delete(comment::delete_comment),
        )
        .route("/api/comments/{id}/like", post(comment::toggle_comment_like))
}

fn user_routes() -> Router<AppState> {
    use controller::user;

    Router::new()
        .route("/api/users/profile", put(user::update_profile))
        .route("/api/users/{username}", get(user::get_profile))
        .route("/api/users/{username}/follow", post(user::toggle_follow))
        .route("/api/users/{username}/followers", get(user::get_followers))
        .route("/api/users/{username}/following", get(user::get_following))
}

fn admin_routes() -> Router<AppState> {
    use controller::admin;

    Router::new()
        .route("/api/admin/stats", get(admin::dashboard))
        .route("/api/admin/stats/{stats_type}", get(admin::detailed_stats))
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/users/{id}", axum::routing::delete(admin::delete_user))
        .route("/api/admin/users/{id}/status", put(admin::update_user_status))
        .route("/api/admin/users/{id}/role", put(admin::update_user_role))
        .route("/api/admin/blogs", get(admin::list_blogs))
        .route("/api/admin/blogs/{id}/status", put(admin::update_blog_status))
}

async fn health() -> Json<MessageDto> {
    Json(MessageDto::new("Server is running"))
}

async fn not_found() -> (StatusCode, Json<ErrorDto>) {
    (StatusCode::NOT_FOUND, Json(ErrorDto::new("Route not found")))
}
