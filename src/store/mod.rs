mod memory;
mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgStore;

use crate::domain::{Harvest, HarvestId, NewHarvest, NewPlant, Plant, PlantId};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database operation failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Applying migrations failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Persistence for plants and their harvests.
///
/// Identifiers are generated by the store on insert. No ordering is promised
/// for any of the listing operations.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    async fn all_plants(&self) -> Result<Vec<Plant>, StoreError>;

    async fn plant(&self, id: PlantId) -> Result<Option<Plant>, StoreError>;

    async fn insert_plant(&self, plant: &NewPlant) -> Result<PlantId, StoreError>;

    /// Overwrites every field. Returns `false` when no plant has this id.
    async fn update_plant(&self, id: PlantId, plant: &NewPlant) -> Result<bool, StoreError>;

    /// Removes the plant together with all harvests referencing it, as one
    /// atomic unit. Returns `false` when no plant has this id.
    async fn delete_plant(&self, id: PlantId) -> Result<bool, StoreError>;

    async fn harvests_for(&self, plant_id: PlantId) -> Result<Vec<Harvest>, StoreError>;

    /// The plant is not required to exist.
    async fn insert_harvest(
        &self,
        plant_id: PlantId,
        harvest: &NewHarvest,
    ) -> Result<HarvestId, StoreError>;
}
