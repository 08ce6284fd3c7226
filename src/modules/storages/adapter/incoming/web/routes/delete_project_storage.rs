use actix_web::{delete, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::VerifiedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    storages::application::ports::incoming::use_cases::DeleteProjectStorageError,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Delete a project storage
///
/// Unlinks a storage from its project. File links of the project's work
/// packages on that storage are removed with it. When the project folder is
/// managed automatically, the remote folder is deleted as well; a remote
/// failure does not prevent the local deletion.
#[utoipa::path(
    delete,
    path = "/api/project_storages/{project_storage_id}",
    tag = "project_storages",
    params(
        ("project_storage_id" = Uuid, Path, description = "Project storage ID")
    ),
    responses(
        (status = 204, description = "Project storage deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (
            status = 403,
            description = "Email not verified or missing permission",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "FORBIDDEN",
                    "message": "You are not allowed to manage storages in this project"
                }
            })
        ),
        (
            status = 404,
            description = "Project storage not found",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PROJECT_STORAGE_NOT_FOUND",
                    "message": "Project storage not found"
                }
            })
        ),
        (
            status = 422,
            description = "Storage configuration cannot be used",
            body = ErrorResponse
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/project_storages/{project_storage_id}")]
pub async fn delete_project_storage_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let actor = UserId::from(user.user_id);
    let project_storage_id = path.into_inner();

    match data
        .storages
        .delete_project_storage
        .execute(actor, project_storage_id)
        .await
    {
        Ok(_) => ApiResponse::no_content(),
        Err(err) => map_delete_project_storage_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_delete_project_storage_error(err: DeleteProjectStorageError) -> HttpResponse {
    match err {
        DeleteProjectStorageError::ProjectStorageNotFound => {
            ApiResponse::not_found("PROJECT_STORAGE_NOT_FOUND", "Project storage not found")
        }
        DeleteProjectStorageError::Forbidden => ApiResponse::forbidden(
            "FORBIDDEN",
            "You are not allowed to manage storages in this project",
        ),
        DeleteProjectStorageError::InvalidStorageConfiguration(msg) => {
            tracing::warn!("Project storage has an unusable configuration: {}", msg);
            ApiResponse::unprocessable(
                "INVALID_STORAGE_CONFIGURATION",
                "The storage configuration of this project storage is invalid",
            )
        }
        DeleteProjectStorageError::RepositoryError(msg) => {
            tracing::error!("Project storage deletion failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
