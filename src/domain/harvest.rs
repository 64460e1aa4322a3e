use super::PlantId;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct HarvestId(Uuid);

impl HarvestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HarvestId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Harvest {
    pub id: HarvestId,

    /// Not checked against the plants table.
    pub plant_id: PlantId,

    /// Free text, e.g. `"3 tomatoes"`.
    pub quantity: String,
    pub date: String,
}
