//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use casa_app::ports::DeviceRepository;
use casa_domain::device::{Device, LightDevice};
use casa_domain::error::DomainError;
use casa_domain::id::RoomId;

use crate::classify::classify;

/// Wrapper for converting database rows into domain [`Device`].
struct DeviceRow(Device);

impl<'r> FromRow<'r, SqliteRow> for DeviceRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let room: Option<i64> = row.try_get("room")?;

        Ok(Self(Device {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            kind: row.try_get("devicetype")?,
            service_type: row.try_get("servicetype")?,
            manufacturer: row.try_get("manufactor")?,
            set_topic: row.try_get("settopic")?,
            get_topic: row.try_get("gettopic")?,
            endpoint: row.try_get("endpoint")?,
            room: room.map(RoomId::new),
        }))
    }
}

/// Wrapper for converting joined rows into domain [`LightDevice`].
struct LightRow(LightDevice);

impl<'r> FromRow<'r, SqliteRow> for LightRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let room: Option<i64> = row.try_get("room")?;

        Ok(Self(LightDevice {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            kind: row.try_get("devicetype")?,
            service_type: row.try_get("servicetype")?,
            manufacturer: row.try_get("manufactor")?,
            set_topic: row.try_get("settopic")?,
            get_topic: row.try_get("gettopic")?,
            endpoint: row.try_get("endpoint")?,
            room: room.map(RoomId::new),
            dimmable: row.try_get("dimmable")?,
            rgb: row.try_get("rgb")?,
        }))
    }
}

const INSERT_DEVICE: &str = "INSERT INTO device (id, name, servicetype, devicetype, manufactor, settopic, gettopic, endpoint, room) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const INSERT_LIGHT: &str = "INSERT INTO light (id, dimmable, rgb) VALUES (?, ?, ?)";
const UPDATE_NAME: &str = "UPDATE device SET name = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM device WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, servicetype, devicetype, manufactor, settopic, gettopic, endpoint, room FROM device";
const SELECT_BY_SERVICE_TYPE: &str = "SELECT id, name, servicetype, devicetype, manufactor, settopic, gettopic, endpoint, room FROM device WHERE servicetype = ?";
const SELECT_LIGHTS: &str = "SELECT device.id AS id, name, servicetype, devicetype, manufactor, settopic, gettopic, endpoint, room, dimmable, rgb FROM device JOIN light ON device.id = light.id";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn add_light(
        &self,
        light: LightDevice,
    ) -> impl Future<Output = Result<(), DomainError>> + Send {
        let pool = self.pool.clone();
        async move {
            // The base/subtype split is a normalization detail; the
            // transaction keeps it from leaking as a partial write. An
            // early return drops `tx`, which rolls the transaction back.
            let mut tx = pool.begin().await.map_err(DomainError::unclassified)?;

            sqlx::query(INSERT_DEVICE)
                .bind(&light.id)
                .bind(&light.name)
                .bind(&light.service_type)
                .bind(&light.kind)
                .bind(&light.manufacturer)
                .bind(&light.set_topic)
                .bind(&light.get_topic)
                .bind(&light.endpoint)
                .bind(light.room.map(RoomId::as_i64))
                .execute(&mut *tx)
                .await
                .map_err(classify)?;

            sqlx::query(INSERT_LIGHT)
                .bind(&light.id)
                .bind(light.dimmable)
                .bind(light.rgb)
                .execute(&mut *tx)
                .await
                .map_err(classify)?;

            // Business rules all passed by now; a commit failure is
            // infrastructure trouble, not a validation failure.
            tx.commit().await.map_err(DomainError::unclassified)?;
            Ok(())
        }
    }

    fn rename(
        &self,
        id: String,
        name: String,
    ) -> impl Future<Output = Result<bool, DomainError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE_NAME)
                .bind(&name)
                .bind(&id)
                .execute(&pool)
                .await
                .map_err(classify)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete(&self, id: String) -> impl Future<Output = Result<bool, DomainError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(&id)
                .execute(&pool)
                .await
                .map_err(classify)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn get_all(
        &self,
        service_type: Option<String>,
    ) -> impl Future<Output = Result<Vec<Device>, DomainError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<DeviceRow> = match service_type {
                Some(st) => {
                    sqlx::query_as(SELECT_BY_SERVICE_TYPE)
                        .bind(st)
                        .fetch_all(&pool)
                        .await
                }
                None => sqlx::query_as(SELECT_ALL).fetch_all(&pool).await,
            }
            .map_err(classify)?;

            Ok(rows.into_iter().map(|row| row.0).collect())
        }
    }

    fn get_lights(&self) -> impl Future<Output = Result<Vec<LightDevice>, DomainError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<LightRow> = sqlx::query_as(SELECT_LIGHTS)
                .fetch_all(&pool)
                .await
                .map_err(classify)?;

            Ok(rows.into_iter().map(|row| row.0).collect())
        }
    }
}
