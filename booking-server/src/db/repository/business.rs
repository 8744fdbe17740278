
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use crate::db::models::{BusinessCreate, BusinessProfile, BusinessUpdate};
use crate::utils::time::now_millis;

use super::{BaseRepository, RepoError, RepoResult};

const TABLE: &str = "business";

pub struct BusinessRepository {
    base: BaseRepository,
}

impl BusinessRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, data: BusinessCreate) -> RepoResult<BusinessProfile> {
        let profile = data.into_profile(now_millis());
        let created: Option<BusinessProfile> =
            self.base.db().create(TABLE).content(profile).await?;
        created.ok_or_else(|| RepoError::Database("business insert returned nothing".into()))
    }

    pub async fn find_all(&self) -> RepoResult<Vec<BusinessProfile>> {
        let businesses: Vec<BusinessProfile> = self.base.db().select(TABLE).await?;
        Ok(businesses)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<BusinessProfile> {
        let rid = self.base.parse_id(id, TABLE)?;
        let business: Option<BusinessProfile> = self.base.db().select(rid).await?;
        business.ok_or_else(|| RepoError::NotFound(format!("business {}", id)))
    }

    pub async fn update(&self, id: &str, mut data: BusinessUpdate) -> RepoResult<BusinessProfile> {
        let rid = self.base.parse_id(id, TABLE)?;
        data.updated_at = Some(now_millis());
        let updated: Option<BusinessProfile> =
            self.base.db().update(rid).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("business {}", id)))
    }

    /// Flip the active flag; approval is how a profile becomes bookable.
    pub async fn set_active(&self, id: &str, active: bool) -> RepoResult<BusinessProfile> {
        let rid = self.base.parse_id(id, TABLE)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $business SET active = $active, updated_at = $now RETURN AFTER")
            .bind(("business", rid))
            .bind(("active", active))
            .bind(("now", now_millis()))
            .await?;
        let updated: Option<BusinessProfile> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("business {}", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<BusinessProfile> {
        let rid = self.base.parse_id(id, TABLE)?;
        let deleted: Option<BusinessProfile> = self.base.db().delete(rid).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("business {}", id)))
    }
}
