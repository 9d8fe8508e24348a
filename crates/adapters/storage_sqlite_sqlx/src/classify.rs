//! Storage error classifier — maps engine failures onto the domain error
//! taxonomy.

use sqlx::error::ErrorKind;

use casa_domain::error::DomainError;

/// Classify an opaque engine failure.
///
/// Total over all inputs: constraint violations map to their taxonomy kind,
/// everything else (connectivity, syntax, timeouts, non-database errors)
/// passes through as [`DomainError::Unclassified`] so new engine error
/// codes fail loud instead of silently misclassifying.
pub(crate) fn classify(err: sqlx::Error) -> DomainError {
    let kind = match &err {
        sqlx::Error::Database(db) => Some(db.kind()),
        _ => None,
    };
    match kind {
        Some(ErrorKind::NotNullViolation) => DomainError::NotNullViolation,
        Some(ErrorKind::UniqueViolation) => DomainError::DuplicateData,
        Some(ErrorKind::ForeignKeyViolation | ErrorKind::CheckViolation) => {
            DomainError::IllegalData(err.to_string())
        }
        _ => DomainError::unclassified(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use sqlx::SqlitePool;

    async fn pool() -> SqlitePool {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        db.pool().clone()
    }

    #[tokio::test]
    async fn should_classify_not_null_violation() {
        let pool = pool().await;
        let err = sqlx::query("INSERT INTO room (name) VALUES (NULL)")
            .execute(&pool)
            .await
            .unwrap_err();

        assert!(matches!(classify(err), DomainError::NotNullViolation));
    }

    #[tokio::test]
    async fn should_classify_unique_violation() {
        let pool = pool().await;
        let insert = "INSERT INTO device (id, name, servicetype, devicetype, manufactor, settopic, gettopic, endpoint) VALUES ('a', 'n', 's', 'light', 'm', 'st', 'gt', 'e')";
        sqlx::query(insert).execute(&pool).await.unwrap();
        let err = sqlx::query(insert).execute(&pool).await.unwrap_err();

        assert!(matches!(classify(err), DomainError::DuplicateData));
    }

    #[tokio::test]
    async fn should_classify_foreign_key_violation_as_illegal_data() {
        let pool = pool().await;
        let err = sqlx::query("INSERT INTO light (id, dimmable, rgb) VALUES ('nope', 0, 0)")
            .execute(&pool)
            .await
            .unwrap_err();

        assert!(matches!(classify(err), DomainError::IllegalData(_)));
    }

    #[tokio::test]
    async fn should_pass_through_unrecognized_failures() {
        let pool = pool().await;
        let err = sqlx::query("SELECT * FROM no_such_table")
            .execute(&pool)
            .await
            .unwrap_err();

        assert!(matches!(classify(err), DomainError::Unclassified(_)));
    }
}
