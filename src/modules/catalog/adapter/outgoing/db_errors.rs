use sea_orm::{DbErr, DeleteResult};

use super::sea_orm_entity::RowDecodeError;
use crate::catalog::application::ports::outgoing::CatalogRepositoryError;
use crate::shared::db_error::{constraint_violation, ConstraintViolation};

/// Insert/update failures: a foreign key violation means the row points at a missing parent.
pub(super) fn map_write_err(e: DbErr) -> CatalogRepositoryError {
    match constraint_violation(&e) {
        Some(ConstraintViolation::Unique) => CatalogRepositoryError::AlreadyExists,
        Some(ConstraintViolation::ForeignKey) => CatalogRepositoryError::UnknownReference,
        None => CatalogRepositoryError::DatabaseError(e.to_string()),
    }
}

/// Delete failures: a foreign key violation means children still reference the row.
pub(super) fn map_delete_err(e: DbErr) -> CatalogRepositoryError {
    match constraint_violation(&e) {
        Some(ConstraintViolation::ForeignKey) => CatalogRepositoryError::HasDependents,
        _ => CatalogRepositoryError::DatabaseError(e.to_string()),
    }
}

pub(super) fn map_read_err(e: DbErr) -> CatalogRepositoryError {
    CatalogRepositoryError::DatabaseError(e.to_string())
}

pub(super) fn map_decode_err(e: RowDecodeError) -> CatalogRepositoryError {
    CatalogRepositoryError::DatabaseError(e.to_string())
}

pub(super) fn map_encode_err(e: serde_json::Error) -> CatalogRepositoryError {
    CatalogRepositoryError::DatabaseError(e.to_string())
}

pub(super) fn ensure_deleted(result: DeleteResult) -> Result<(), CatalogRepositoryError> {
    if result.rows_affected == 0 {
        return Err(CatalogRepositoryError::NotFound);
    }
    Ok(())
}
