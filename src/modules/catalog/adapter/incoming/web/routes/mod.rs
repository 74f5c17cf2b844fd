mod admin_courses;
mod admin_jobs;
mod admin_roles;
mod admin_streams;
mod admin_sub_domains;
mod get_career_path;
mod list_roles_by_sub_domain;
mod list_streams;

pub use admin_courses::*;
pub use admin_jobs::*;
pub use admin_roles::*;
pub use admin_streams::*;
pub use admin_sub_domains::*;
pub use get_career_path::*;
pub use list_roles_by_sub_domain::*;
pub use list_streams::*;

use actix_web::HttpResponse;
use tracing::error;

use crate::catalog::application::ports::incoming::use_cases::CatalogAdminError;
use crate::shared::api::ApiResponse;

/// Shared mapping for every admin catalog mutation and listing.
pub(crate) fn admin_error_response(err: CatalogAdminError) -> HttpResponse {
    match &err {
        CatalogAdminError::NotFound(_) => ApiResponse::not_found("NOT_FOUND", &err.to_string()),
        CatalogAdminError::AlreadyExists(_) => {
            ApiResponse::conflict("ALREADY_EXISTS", &err.to_string())
        }
        CatalogAdminError::HasDependents(_) => {
            ApiResponse::conflict("HAS_DEPENDENTS", &err.to_string())
        }
        CatalogAdminError::UnknownReference(_) => {
            ApiResponse::bad_request("INVALID_REFERENCE", &err.to_string())
        }
        CatalogAdminError::RepositoryError(msg) => {
            error!("Catalog store failure: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
