use axum::{
    extract::{Multipart, Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::user::{
        FollowResponseDto, ProfileResponseDto, ProfileStatsDto, UpdateProfileResponseDto,
        UserListResponseDto,
    },
    server::{
        controller::form::MultipartForm,
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{public_profile_dto, user_dto, user_summary_dto, UpdateProfileParams},
        service::{upload::UploadService, user::UserService},
        state::AppState,
    },
};

pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.token_service, &headers)
        .optional()
        .await?;

    let profile = UserService::new(&state.db)
        .public_profile(&username, viewer.map(|u| u.id))
        .await?;

    Ok(Json(ProfileResponseDto {
        success: true,
        user: public_profile_dto(&profile.user),
        followers: profile.followers.iter().map(user_summary_dto).collect(),
        following: profile.following.iter().map(user_summary_dto).collect(),
        blogs: profile
            .blogs
            .into_iter()
            .map(|b| b.into_list_dto())
            .collect(),
        stats: ProfileStatsDto {
            total_blogs: profile.stats.total_blogs,
            total_views: profile.stats.total_views,
            total_likes: profile.stats.total_likes,
        },
    }))
}

pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;

    let form = MultipartForm::read(multipart, &["avatar"]).await?;

    // Unlike blog images, a failed avatar upload fails the whole request.
    let avatar = match form.image.clone() {
        Some(image) => Some(
            UploadService::new(&state.http_client, &state.upload)
                .upload_image(image)
                .await
                .map_err(|err| match err {
                    AppError::BadRequest(message) => AppError::BadRequest(message),
                    _ => AppError::BadRequest("Avatar upload failed".to_string()),
                })?,
        ),
        None => None,
    };

    let params = UpdateProfileParams {
        first_name: form.value("firstName").map(str::to_string),
        last_name: form.value("lastName").map(str::to_string),
        bio: form.value("bio").map(str::to_string),
        website: form.value("website").map(str::to_string),
        twitter: form.value("twitter").map(str::to_string),
        linkedin: form.value("linkedin").map(str::to_string),
        github: form.value("github").map(str::to_string),
        avatar,
    };

    let updated = UserService::new(&state.db).update_profile(user, params).await?;

    Ok(Json(UpdateProfileResponseDto {
        success: true,
        message: "Profile updated successfully".to_string(),
        user: user_dto(&updated),
    }))
}

pub async fn toggle_follow(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;
    let target_id = parse_id(&username)?;

    let (is_following, followers_count) = UserService::new(&state.db)
        .toggle_follow(user.id, target_id)
        .await?;

    Ok(Json(FollowResponseDto {
        success: true,
        message: if is_following {
            "User followed"
        } else {
            "User unfollowed"
        }
        .to_string(),
        is_following,
        followers_count,
    }))
}

pub async fn get_followers(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_id(&username)?;

    let followers = UserService::new(&state.db).followers(user_id).await?;

    Ok(Json(UserListResponseDto {
        success: true,
        users: followers.iter().map(user_summary_dto).collect(),
    }))
}

pub async fn get_following(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_id(&username)?;

    let following = UserService::new(&state.db).following(user_id).await?;

    Ok(Json(UserListResponseDto {
        success: true,
        users: following.iter().map(user_summary_dto).collect(),
    }))
}

/// The follow and follow-listing routes share their path segment with the
/// profile route, so the id arrives as a string and is parsed here.
fn parse_id(value: &str) -> Result<i32, AppError> {
    value
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid user id".to_string()))
}
