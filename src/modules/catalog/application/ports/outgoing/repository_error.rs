/// Failure modes shared by every catalog table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Record with the same unique key already exists")]
    AlreadyExists,

    #[error("Record is still referenced by other records")]
    HasDependents,

    #[error("Referenced record does not exist")]
    UnknownReference,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
