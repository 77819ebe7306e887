//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::UserResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the user API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mongo User API",
        version = "0.1.0",
        description = "User create/list endpoints backed by MongoDB",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::list_users,
    ),
    components(
        schemas(
            UserResponse,
            MessageResponse,
            user_handler::CreateUserRequest,
        )
    ),
    tags(
        (name = "Users", description = "User records")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_user_operations() {
        let doc = ApiDoc::openapi();
        let users = doc.paths.paths.get("/api/users").expect("users path");

        let json = serde_json::to_value(users).unwrap();
        assert!(json.get("get").is_some());
        assert!(json.get("post").is_some());
        assert_eq!(doc.paths.paths.len(), 1);
    }

    #[test]
    fn test_document_serializes() {
        let json = ApiDoc::openapi().to_pretty_json().unwrap();
        assert!(json.contains("CreateUserRequest"));
        assert!(json.contains("_id"));
    }
}
