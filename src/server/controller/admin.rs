use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::UserRole;
use serde::Deserialize;

use crate::{
    model::{
        admin::{AdminBlogListResponseDto, DashboardResponseDto, DetailedStatsResponseDto},
        api::{MessageDto, PaginationDto, UserPaginationDto},
        user::{PaginatedUsersDto, UpdateProfileResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            admin::StatsType,
            blog::{parse_category, parse_status, AdminBlogQuery},
            user::{parse_role, user_dto, AdminUserQuery},
        },
        service::{admin::AdminService, blog::BlogService},
        state::AppState,
    },
};

const DEFAULT_PAGE_SIZE: u64 = 10;
const STATS_PAGE_SIZE: u64 = 20;

#[derive(Deserialize)]
pub struct StatsParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Deserialize)]
pub struct AdminUserParams {
    pub search: Option<String>,
    /// Role name, or `all` for no filter.
    pub role: Option<String>,
    /// `active` or `inactive`, or `all` for no filter.
    pub status: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Deserialize)]
pub struct AdminBlogParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserStatusRequest {
    pub is_active: bool,
}

#[derive(Deserialize)]
pub struct UpdateUserRoleRequest {
    pub role: String,
}

#[derive(Deserialize)]
pub struct UpdateBlogStatusRequest {
    pub status: String,
}

pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let stats = AdminService::new(&state.db).dashboard().await?;

    Ok(Json(DashboardResponseDto {
        success: true,
        stats: stats.into_dto(),
    }))
}

pub async fn detailed_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(stats_type): Path<String>,
    Query(params): Query<StatsParams>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let stats_type = StatsType::parse(&stats_type)
        .ok_or_else(|| AppError::BadRequest("Invalid stats type".to_string()))?;

    let stats = AdminService::new(&state.db)
        .detailed_stats(
            stats_type,
            params.page.unwrap_or(1).max(1),
            params.limit.unwrap_or(STATS_PAGE_SIZE).max(1),
        )
        .await?;

    Ok(Json(DetailedStatsResponseDto {
        success: true,
        stats_type: stats.stats_type.as_str().to_string(),
        pagination: PaginationDto {
            current_page: stats.page,
            total_pages: stats.total_pages,
            total: stats.total,
            has_next: stats.page < stats.total_pages,
            has_prev: stats.page > 1,
        },
        data: stats.rows.into_dto(),
    }))
}

pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AdminUserParams>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let role = match params.role.as_deref() {
        None | Some("all") | Some("") => None,
        Some(value) => {
            Some(parse_role(value).ok_or_else(|| AppError::BadRequest("Invalid role".to_string()))?)
        }
    };
    let is_active = match params.status.as_deref() {
        Some("active") => Some(true),
        Some("inactive") => Some(false),
        _ => None,
    };

    let query = AdminUserQuery {
        search: params.search.filter(|s| !s.trim().is_empty()),
        role,
        is_active,
        page: params.page.unwrap_or(1).max(1),
        per_page: params.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
    };

    let (users, total) = AdminService::new(&state.db).users(&query).await?;
    let total_pages = total.div_ceil(query.per_page);

    Ok(Json(PaginatedUsersDto {
        success: true,
        users: users.iter().map(user_dto).collect(),
        pagination: UserPaginationDto {
            current_page: query.page,
            total_pages,
            total_users: total,
            has_next: query.page < total_pages,
            has_prev: query.page > 1,
        },
    }))
}

pub async fn list_blogs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AdminBlogParams>,
) -> Result<impl IntoResponse, AppError> {
    let admin = require_admin(&state, &headers).await?;

    let status = match params.status.as_deref() {
        None | Some("all") | Some("") => None,
        Some(value) => Some(
            parse_status(value)
                .ok_or_else(|| AppError::BadRequest("Invalid status".to_string()))?,
        ),
    };
    let category = match params.category.as_deref() {
        None | Some("all") | Some("") => None,
        Some(value) => Some(
            parse_category(value)
                .ok_or_else(|| AppError::BadRequest("Invalid category".to_string()))?,
        ),
    };

    let query = AdminBlogQuery {
        search: params.search.filter(|s| !s.trim().is_empty()),
        status,
        category,
        page: params.page.unwrap_or(1).max(1),
        per_page: params.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
    };

    let page = BlogService::new(&state.db)
        .admin_list(&query, admin.id)
        .await?;

    Ok(Json(AdminBlogListResponseDto {
        success: true,
        pagination: page.pagination_dto(),
        blogs: page.into_list_dtos(),
    }))
}

pub async fn update_user_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(body): Json<UpdateUserStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let user = AdminService::new(&state.db)
        .set_user_status(id, body.is_active)
        .await?;

    let message = if user.is_active {
        "User activated successfully"
    } else {
        "User deactivated successfully"
    };

    Ok(Json(UpdateProfileResponseDto {
        success: true,
        message: message.to_string(),
        user: user_dto(&user),
    }))
}

pub async fn update_user_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(body): Json<UpdateUserRoleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let admin = require_admin(&state, &headers).await?;

    let role =
        parse_role(&body.role).ok_or_else(|| AppError::BadRequest("Invalid role".to_string()))?;

    let user = AdminService::new(&state.db)
        .set_user_role(admin.id, id, role)
        .await?;

    Ok(Json(UpdateProfileResponseDto {
        success: true,
        message: "User role updated successfully".to_string(),
        user: user_dto(&user),
    }))
}

pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = require_admin(&state, &headers).await?;

    AdminService::new(&state.db).delete_user(admin.id, id).await?;

    Ok(Json(MessageDto::new("User deleted successfully")))
}

pub async fn update_blog_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(body): Json<UpdateBlogStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let admin = require_admin(&state, &headers).await?;

    let status = parse_status(&body.status)
        .ok_or_else(|| AppError::BadRequest("Invalid status".to_string()))?;

    let blog = AdminService::new(&state.db)
        .set_blog_status(id, status, admin.id)
        .await?;

    Ok(Json(crate::model::blog::BlogResponseDto {
        success: true,
        message: "Blog status updated successfully".to_string(),
        blog: blog.into_detail_dto(),
    }))
}

async fn require_admin(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<entity::user::Model, AppError> {
    AuthGuard::new(&state.db, &state.token_service, headers)
        .require_role(&[UserRole::Admin])
        .await
}
