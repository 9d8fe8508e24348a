//! `SQLite` implementation of [`RoomRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use casa_app::ports::RoomRepository;
use casa_domain::error::DomainError;
use casa_domain::id::RoomId;
use casa_domain::room::Room;

use crate::classify::classify;

/// Wrapper for converting database rows into domain [`Room`].
struct RoomRow(Room);

impl<'r> FromRow<'r, SqliteRow> for RoomRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;

        Ok(Self(Room {
            id: RoomId::new(id),
            name: row.try_get("name")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO room (name) VALUES (?)";
const UPDATE_NAME: &str = "UPDATE room SET name = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM room WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name FROM room";

/// `SQLite`-backed room repository.
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RoomRepository for SqliteRoomRepository {
    fn add(&self, name: String) -> impl Future<Output = Result<Room, DomainError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&name)
                .execute(&pool)
                .await
                .map_err(classify)?;

            Ok(Room {
                id: RoomId::new(result.last_insert_rowid()),
                name,
            })
        }
    }

    fn rename(
        &self,
        id: RoomId,
        name: String,
    ) -> impl Future<Output = Result<bool, DomainError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE_NAME)
                .bind(&name)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(classify)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete(&self, id: RoomId) -> impl Future<Output = Result<bool, DomainError>> + Send {
        let pool = self.pool.clone();
        async move {
            // A room still referenced by a device trips the foreign key,
            // which the classifier surfaces as IllegalData.
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(classify)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, DomainError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<RoomRow> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(classify)?;

            Ok(rows.into_iter().map(|row| row.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device_repo::SqliteDeviceRepository;
    use crate::pool::Config;
    use casa_app::ports::DeviceRepository;
    use casa_domain::device::LightDevice;

    async fn setup() -> SqliteRoomRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteRoomRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_add_room_and_return_generated_id() {
        let repo = setup().await;
        let first = repo.add("Living Room".to_string()).await.unwrap();
        let second = repo.add("Kitchen".to_string()).await.unwrap();

        assert_ne!(first.id, second.id);

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_vec_on_empty_store() {
        let repo = setup().await;
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_rename_by_affected_rows() {
        let repo = setup().await;
        let room = repo.add("Living Room".to_string()).await.unwrap();

        assert!(repo.rename(room.id, "Lounge".to_string()).await.unwrap());
        assert!(
            !repo
                .rename(RoomId::new(99), "Lounge".to_string())
                .await
                .unwrap()
        );

        let all = repo.get_all().await.unwrap();
        assert_eq!(all[0].name, "Lounge");
    }

    #[tokio::test]
    async fn should_delete_by_affected_rows() {
        let repo = setup().await;
        let room = repo.add("Living Room".to_string()).await.unwrap();

        assert!(repo.delete(room.id).await.unwrap());
        assert!(!repo.delete(room.id).await.unwrap());
    }

    #[tokio::test]
    async fn should_block_delete_while_referenced_by_device() {
        let repo = setup().await;
        let room = repo.add("Living Room".to_string()).await.unwrap();

        let devices = SqliteDeviceRepository::new(repo.pool.clone());
        devices
            .add_light(LightDevice {
                id: "unique".to_string(),
                name: "light1".to_string(),
                kind: "light".to_string(),
                service_type: "http._tcp".to_string(),
                manufacturer: "custom".to_string(),
                set_topic: "setunique".to_string(),
                get_topic: "getunique".to_string(),
                endpoint: "unique.local".to_string(),
                room: Some(room.id),
                dimmable: true,
                rgb: false,
            })
            .await
            .unwrap();

        let result = repo.delete(room.id).await;
        assert!(matches!(result, Err(DomainError::IllegalData(_))));

        // The device keeps its reference; nothing was detached.
        let lights = devices.get_lights().await.unwrap();
        assert_eq!(lights[0].room, Some(room.id));

        // Removing the device unblocks the room delete.
        devices.delete("unique".to_string()).await.unwrap();
        assert!(repo.delete(room.id).await.unwrap());
    }
}
