
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use crate::db::models::{CancellationRule, CancellationRuleCreate};
use crate::utils::time::now_millis;

use super::{BaseRepository, RepoError, RepoResult};

const TABLE: &str = "cancellation_rule";

pub struct PolicyRepository {
    base: BaseRepository,
}

impl PolicyRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(
        &self,
        business_id: RecordId,
        data: CancellationRuleCreate,
    ) -> RepoResult<CancellationRule> {
        let rule = CancellationRule {
            id: None,
            business_id,
            days_before: data.days_before,
            refund_percentage: data.refund_percentage,
            created_at: Some(now_millis()),
        };
        let created: Option<CancellationRule> =
            self.base.db().create(TABLE).content(rule).await?;
        created.ok_or_else(|| RepoError::Database("cancellation rule insert returned nothing".into()))
    }

    /// Rules for a business, most demanding lead time first, which is
    /// the order the refund evaluation walks them in.
    pub async fn find_by_business(
        &self,
        business_id: &RecordId,
    ) -> RepoResult<Vec<CancellationRule>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM cancellation_rule \
                 WHERE business_id = $business \
                 ORDER BY days_before DESC",
            )
            .bind(("business", business_id.to_string()))
            .await?;
        let rules: Vec<CancellationRule> = result.take(0)?;
        Ok(rules)
    }

    pub async fn delete(&self, id: &str) -> RepoResult<CancellationRule> {
        let rid = self.base.parse_id(id, TABLE)?;
        let deleted: Option<CancellationRule> = self.base.db().delete(rid).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("cancellation rule {}", id)))
    }
}
