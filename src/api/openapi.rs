use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storages API",
        version = "1.0.0",
        description = "Project storage management for file storage integrations",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Project storage endpoints
        crate::storages::adapter::incoming::web::routes::delete_project_storage_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "project_storages", description = "Links between projects and file storages"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
