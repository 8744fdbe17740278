
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use shared::RoomStatus;

use crate::db::models::{Room, RoomCreate, RoomUpdate};
use crate::utils::time::now_millis;

use super::{BaseRepository, RepoError, RepoResult};

const TABLE: &str = "room";

pub struct RoomRepository {
    base: BaseRepository,
}

impl RoomRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, business_id: RecordId, data: RoomCreate) -> RepoResult<Room> {
        let now = now_millis();
        let room = Room {
            id: None,
            business_id,
            name: data.name,
            capacity: data.capacity,
            nightly_rate: data.nightly_rate,
            active: true,
            status: RoomStatus::Available,
            created_at: Some(now),
            updated_at: Some(now),
        };
        let created: Option<Room> = self.base.db().create(TABLE).content(room).await?;
        created.ok_or_else(|| RepoError::Database("room insert returned nothing".into()))
    }

    pub async fn find_by_business(&self, business_id: &RecordId) -> RepoResult<Vec<Room>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM room WHERE business_id = $business ORDER BY name")
            .bind(("business", business_id.to_string()))
            .await?;
        let rooms: Vec<Room> = result.take(0)?;
        Ok(rooms)
    }

    /// Rooms that can host at least `min_capacity` guests and are
    /// currently bookable (active, not under maintenance or cleaning).
    pub async fn find_candidates(
        &self,
        business_id: &RecordId,
        min_capacity: u32,
    ) -> RepoResult<Vec<Room>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM room \
                 WHERE business_id = $business \
                   AND active = true \
                   AND status = 'available' \
                   AND capacity >= $min_capacity \
                 ORDER BY capacity, name",
            )
            .bind(("business", business_id.to_string()))
            .bind(("min_capacity", min_capacity))
            .await?;
        let rooms: Vec<Room> = result.take(0)?;
        Ok(rooms)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Room> {
        let rid = self.base.parse_id(id, TABLE)?;
        let room: Option<Room> = self.base.db().select(rid).await?;
        room.ok_or_else(|| RepoError::NotFound(format!("room {}", id)))
    }

    pub async fn update(&self, id: &str, mut data: RoomUpdate) -> RepoResult<Room> {
        let rid = self.base.parse_id(id, TABLE)?;
        data.updated_at = Some(now_millis());
        let updated: Option<Room> = self.base.db().update(rid).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("room {}", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Room> {
        let rid = self.base.parse_id(id, TABLE)?;
        let deleted: Option<Room> = self.base.db().delete(rid).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("room {}", id)))
    }
}
