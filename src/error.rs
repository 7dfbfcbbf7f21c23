use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Failures surfaced by the storage operations in [`crate::store`].
///
/// Constraint failures are classified from what Postgres reports and are
/// passed to the caller unchanged; nothing here retries.
#[derive(thiserror::Error)]
pub enum StoreError {
    #[error("null value in required column '{column}'")]
    NotNullViolation { column: String },
    #[error("unique constraint '{}' was violated", .constraint.as_deref().unwrap_or("unnamed"))]
    ConstraintViolation { constraint: Option<String> },
    #[error("foreign key constraint '{}' was violated", .constraint.as_deref().unwrap_or("unnamed"))]
    ReferentialIntegrityViolation { constraint: Option<String> },
    #[error("the requested row does not exist")]
    NotFound,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<DieselError> for StoreError {
    fn from(error: DieselError) -> Self {
        match error {
            DieselError::NotFound => StoreError::NotFound,
            DieselError::DatabaseError(kind, info) => match classify(&kind, info.as_ref()) {
                Some(error) => error,
                None => StoreError::UnexpectedError(
                    anyhow::Error::new(DieselError::DatabaseError(kind, info))
                        .context("The database rejected the statement."),
                ),
            },
            other => StoreError::UnexpectedError(
                anyhow::Error::new(other).context("Failed to execute a database operation."),
            ),
        }
    }
}

// diesel 1.x has no dedicated kind for not-null failures. They are recognised
// from the message, or from a reported column without a constraint name when
// the server's messages are localized.
fn classify(
    kind: &DatabaseErrorKind,
    info: &(dyn DatabaseErrorInformation + Send + Sync),
) -> Option<StoreError> {
    let constraint = info.constraint_name().map(str::to_owned);
    match kind {
        DatabaseErrorKind::UniqueViolation => Some(StoreError::ConstraintViolation { constraint }),
        DatabaseErrorKind::ForeignKeyViolation => {
            Some(StoreError::ReferentialIntegrityViolation { constraint })
        }
        _ if is_not_null_violation(info) => {
            Some(StoreError::NotNullViolation {
                column: info
                    .column_name()
                    .map(str::to_owned)
                    .or_else(|| column_from_message(info.message()))
                    .unwrap_or_else(|| "unknown".into()),
            })
        }
        _ => None,
    }
}

fn is_not_null_violation(info: &(dyn DatabaseErrorInformation + Send + Sync)) -> bool {
    info.message().contains("violates not-null constraint")
        || (info.column_name().is_some() && info.constraint_name().is_none())
}

fn column_from_message(message: &str) -> Option<String> {
    let rest = message.split("column \"").nth(1)?;
    rest.split('"').next().map(str::to_owned)
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
