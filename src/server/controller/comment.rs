use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::MessageDto,
        comment::{CommentLikeResponseDto, CommentListResponseDto, CommentResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comment::CreateCommentParams,
        service::comment::CommentService,
        state::AppState,
    },
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    /// Blog the comment belongs to.
    pub blog: i32,
    /// Set when replying to a top-level comment.
    pub parent_comment_id: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateCommentRequest {
    pub content: String,
}

/// Lists the comment thread for a blog. The path parameter is the blog id.
pub async fn get_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(blog_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.token_service, &headers)
        .optional()
        .await?;

    let thread = CommentService::new(&state.db)
        .thread_for_blog(blog_id, viewer.map(|u| u.id))
        .await?;

    Ok(Json(CommentListResponseDto {
        success: true,
        comments: thread.into_iter().map(|c| c.into_dto()).collect(),
    }))
}

pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;

    let comment = CommentService::new(&state.db)
        .create(CreateCommentParams {
            content: body.content,
            blog_id: body.blog,
            parent_id: body.parent_comment_id,
            author_id: user.id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentResponseDto {
            success: true,
            message: "Comment added successfully".to_string(),
            comment: comment.into_dto(),
        }),
    ))
}

pub async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(body): Json<UpdateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;

    let comment = CommentService::new(&state.db)
        .update(id, &user, body.content)
        .await?;

    Ok(Json(CommentResponseDto {
        success: true,
        message: "Comment updated successfully".to_string(),
        comment: comment.into_dto(),
    }))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;

    CommentService::new(&state.db).delete(id, &user).await?;

    Ok(Json(MessageDto::new("Comment deleted successfully")))
}

pub async fn toggle_comment_like(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;

    let (is_liked, likes_count) = CommentService::new(&state.db)
        .toggle_like(id, user.id)
        .await?;

    Ok(Json(CommentLikeResponseDto {
        success: true,
        message: if is_liked {
            "Comment liked"
        } else {
            "Comment unliked"
        }
        .to_string(),
        is_liked,
        likes_count,
    }))
}
