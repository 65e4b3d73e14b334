use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::BlogStatus;
use serde::Deserialize;
use tracing::warn;

use crate::{
    model::{
        api::MessageDto,
        blog::{BlogDetailResponseDto, BlogLikeResponseDto, BlogListResponseDto, BlogResponseDto},
    },
    server::{
        controller::form::MultipartForm,
        error::AppError,
        middleware::auth::AuthGuard,
        model::blog::{
            parse_category, parse_status, BlogQuery, BlogSort, CreateBlogParams, UpdateBlogParams,
        },
        service::{blog::BlogService, upload::UploadService},
        state::AppState,
        util::tags::parse_tags,
    },
};

const DEFAULT_PAGE_SIZE: u64 = 10;
const MY_BLOGS_PAGE_SIZE: u64 = 50;

/// Query parameters for the published blog listing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListParams {
    /// Category name, or `all` for no filter.
    pub category: Option<String>,
    /// Comma-separated tag list.
    pub tags: Option<String>,
    /// Author user id.
    pub author: Option<i32>,
    pub search: Option<String>,
    /// `createdAt` (default), `views`, or `likes`.
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default).
    pub order: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Deserialize)]
pub struct MyBlogsParams {
    pub status: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

pub async fn list_blogs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BlogListParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.token_service, &headers)
        .optional()
        .await?;

    let category = match params.category.as_deref() {
        None | Some("all") | Some("") => None,
        Some(value) => Some(
            parse_category(value)
                .ok_or_else(|| AppError::BadRequest("Invalid category".to_string()))?,
        ),
    };

    let tags = params
        .tags
        .as_deref()
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let query = BlogQuery {
        category,
        tags,
        author_id: params.author,
        search: params.search.filter(|s| !s.trim().is_empty()),
        sort_by: BlogSort::parse(params.sort_by.as_deref()),
        ascending: params.order.as_deref() == Some("asc"),
        page: params.page.unwrap_or(1).max(1),
        per_page: params.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
    };

    let page = BlogService::new(&state.db)
        .list(&query, viewer.map(|u| u.id))
        .await?;

    Ok(Json(BlogListResponseDto {
        success: true,
        pagination: page.pagination_dto(),
        blogs: page.into_list_dtos(),
    }))
}

pub async fn my_blogs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<MyBlogsParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;

    let status = match params.status.as_deref() {
        None | Some("all") | Some("") => None,
        Some(value) => Some(
            parse_status(value)
                .ok_or_else(|| AppError::BadRequest("Invalid status".to_string()))?,
        ),
    };

    let page = BlogService::new(&state.db)
        .my_blogs(
            user.id,
            status,
            params.page.unwrap_or(1).max(1),
            params.limit.unwrap_or(MY_BLOGS_PAGE_SIZE).max(1),
        )
        .await?;

    Ok(Json(BlogListResponseDto {
        success: true,
        pagination: page.pagination_dto(),
        blogs: page.into_list_dtos(),
    }))
}

pub async fn get_blog_by_slug(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.token_service, &headers)
        .optional()
        .await?;

    let (blog, comments) = BlogService::new(&state.db)
        .get_by_slug(&slug, viewer.as_ref())
        .await?;

    Ok(Json(BlogDetailResponseDto {
        success: true,
        blog: blog.into_detail_dto(),
        comments: comments.into_iter().map(|c| c.into_dto()).collect(),
    }))
}

pub async fn get_blog_for_edit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;

    let blog = BlogService::new(&state.db).get_for_edit(id, &user).await?;

    Ok(Json(BlogDetailResponseDto {
        success: true,
        blog: blog.into_detail_dto(),
        comments: Vec::new(),
    }))
}

pub async fn create_blog(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;

    let form = MultipartForm::read(multipart, &["featuredImage"]).await?;

    let title = require_field(&form, "title")?;
    let content = require_field(&form, "content")?;
    let category = parse_category(require_field(&form, "category")?)
        .ok_or_else(|| AppError::BadRequest("Invalid category".to_string()))?;

    let status = match form.value("status") {
        None | Some("") => BlogStatus::Draft,
        Some(value) => parse_status(value)
            .ok_or_else(|| AppError::BadRequest("Invalid status".to_string()))?,
    };

    let featured_image = forward_image(&state, form.image.clone()).await;
    let tags = parse_tags(form.values("tags"));

    let blog = BlogService::new(&state.db)
        .create(CreateBlogParams {
            title: title.to_string(),
            content: content.to_string(),
            excerpt: form.value("excerpt").map(str::to_string),
            category,
            status: status.clone(),
            tags,
            featured_image,
            author_id: user.id,
        })
        .await?;

    let message = if status == BlogStatus::Published {
        "Blog published successfully"
    } else {
        "Blog saved as draft successfully"
    };

    Ok((
        StatusCode::CREATED,
        Json(BlogResponseDto {
            success: true,
            message: message.to_string(),
            blog: blog.into_detail_dto(),
        }),
    ))
}

pub async fn update_blog(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;
    let id = parse_id(&slug)?;

    let form = MultipartForm::read(multipart, &["featuredImage"]).await?;

    let category = match form.value("category") {
        None | Some("") => None,
        Some(value) => Some(
            parse_category(value)
                .ok_or_else(|| AppError::BadRequest("Invalid category".to_string()))?,
        ),
    };
    let status = match form.value("status") {
        None | Some("") => None,
        Some(value) => Some(
            parse_status(value)
                .ok_or_else(|| AppError::BadRequest("Invalid status".to_string()))?,
        ),
    };

    let tags = (!form.values("tags").is_empty()).then(|| parse_tags(form.values("tags")));
    let featured_image = forward_image(&state, form.image.clone()).await;

    let params = UpdateBlogParams {
        title: form.value("title").map(str::to_string),
        content: form.value("content").map(str::to_string),
        excerpt: form.value("excerpt").map(str::to_string),
        category,
        status,
        tags,
        featured_image,
    };

    let blog = BlogService::new(&state.db).update(id, &user, params).await?;

    Ok(Json(BlogResponseDto {
        success: true,
        message: "Blog updated successfully".to_string(),
        blog: blog.into_detail_dto(),
    }))
}

pub async fn delete_blog(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;
    let id = parse_id(&slug)?;

    BlogService::new(&state.db).delete(id, &user).await?;

    Ok(Json(MessageDto::new("Blog deleted successfully")))
}

pub async fn toggle_blog_like(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;
    let id = parse_id(&slug)?;

    let (is_liked, likes_count) = BlogService::new(&state.db).toggle_like(id, user.id).await?;

    Ok(Json(BlogLikeResponseDto {
        success: true,
        message: if is_liked { "Blog liked" } else { "Blog unliked" }.to_string(),
        is_liked,
        likes_count,
    }))
}

/// Forwards an uploaded featured image to the image host.
///
/// Blog image failures are non-fatal; the blog is saved without an image
/// and the failure is logged.
async fn forward_image(
    state: &AppState,
    image: Option<crate::server::service::upload::ImageUpload>,
) -> Option<String> {
    let image = image?;

    match UploadService::new(&state.http_client, &state.upload)
        .upload_image(image)
        .await
    {
        Ok(url) => Some(url),
        Err(err) => {
            warn!("Featured image upload failed: {}", err);
            None
        }
    }
}

fn require_field<'a>(form: &'a MultipartForm, name: &str) -> Result<&'a str, AppError> {
    form.value(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{} is required", capitalize(name))))
}

fn parse_id(value: &str) -> Result<i32, AppError> {
    value
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid blog id".to_string()))
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
