use sea_orm::{DbErr, SqlErr};

/// Constraint failures the adapters translate into domain errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Postgres `23505`
    Unique,
    /// Postgres `23503`
    ForeignKey,
}

pub fn constraint_violation(err: &DbErr) -> Option<ConstraintViolation> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => return Some(ConstraintViolation::Unique),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            return Some(ConstraintViolation::ForeignKey)
        }
        _ => {}
    }

    // Drivers that do not expose a SQLSTATE still mention it in the message.
    let msg = err.to_string().to_lowercase();
    if msg.contains("23505") || msg.contains("duplicate key") {
        Some(ConstraintViolation::Unique)
    } else if msg.contains("23503") || msg.contains("foreign key") {
        Some(ConstraintViolation::ForeignKey)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn duplicate_key_message_is_unique_violation() {
        let err = DbErr::Exec(RuntimeErr::Internal(
            "duplicate key value violates unique constraint \"idx_users_email\"".into(),
        ));

        assert_eq!(constraint_violation(&err), Some(ConstraintViolation::Unique));
    }

    #[test]
    fn foreign_key_sqlstate_is_detected() {
        let err = DbErr::Custom("error returned from database: 23503".into());

        assert_eq!(
            constraint_violation(&err),
            Some(ConstraintViolation::ForeignKey)
        );
    }

    #[test]
    fn other_errors_are_not_constraints() {
        let err = DbErr::Custom("connection refused".into());

        assert_eq!(constraint_violation(&err), None);
    }
}
