use super::{RecordStore, StoreError};
use crate::domain::{Harvest, HarvestId, NewHarvest, NewPlant, Plant, PlantId};
use sqlx::{PgPool, Postgres, Transaction};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

async fn delete_harvests_of(
    transaction: &mut Transaction<'_, Postgres>,
    plant_id: PlantId,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("delete from harvests where plant_id = $1")
        .bind(plant_id)
        .execute(transaction.as_mut())
        .await?;

    Ok(result.rows_affected())
}

impl RecordStore for PgStore {
    async fn all_plants(&self) -> Result<Vec<Plant>, StoreError> {
        let plants = sqlx::query_as::<_, Plant>(
            "select id, name, variety, photo_url, date_planted from plants",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(plants)
    }

    async fn plant(&self, id: PlantId) -> Result<Option<Plant>, StoreError> {
        let plant = sqlx::query_as::<_, Plant>(
            "select id, name, variety, photo_url, date_planted from plants where id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plant)
    }

    async fn insert_plant(&self, plant: &NewPlant) -> Result<PlantId, StoreError> {
        let id: PlantId = sqlx::query_scalar(
            "insert into plants (name, variety, photo_url, date_planted)
             values ($1, $2, $3, $4) returning id",
        )
        .bind(&plant.name)
        .bind(&plant.variety)
        .bind(&plant.photo_url)
        .bind(&plant.date_planted)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_plant(&self, id: PlantId, plant: &NewPlant) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "update plants
                set name = $1, variety = $2, photo_url = $3, date_planted = $4
              where id = $5",
        )
        .bind(&plant.name)
        .bind(&plant.variety)
        .bind(&plant.photo_url)
        .bind(&plant.date_planted)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_plant(&self, id: PlantId) -> Result<bool, StoreError> {
        let mut transaction = self.pool.begin().await?;

        let deleted = sqlx::query("delete from plants where id = $1")
            .bind(id)
            .execute(transaction.as_mut())
            .await?
            .rows_affected();

        if deleted == 0 {
            transaction.rollback().await?;
            return Ok(false);
        }

        let harvests = delete_harvests_of(&mut transaction, id).await?;
        transaction.commit().await?;

        tracing::debug!(plant_id = %id, harvests, "Deleted plant and its harvests");
        Ok(true)
    }

    async fn harvests_for(&self, plant_id: PlantId) -> Result<Vec<Harvest>, StoreError> {
        let harvests = sqlx::query_as::<_, Harvest>(
            "select id, plant_id, quantity, date from harvests where plant_id = $1",
        )
        .bind(plant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(harvests)
    }

    async fn insert_harvest(
        &self,
        plant_id: PlantId,
        harvest: &NewHarvest,
    ) -> Result<HarvestId, StoreError> {
        let id: HarvestId = sqlx::query_scalar(
            "insert into harvests (plant_id, quantity, date) values ($1, $2, $3) returning id",
        )
        .bind(plant_id)
        .bind(&harvest.quantity)
        .bind(&harvest.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
