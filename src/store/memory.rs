use super::{RecordStore, StoreError};
use crate::domain::{Harvest, HarvestId, NewHarvest, NewPlant, Plant, PlantId};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Collections {
    plants: Vec<Plant>,
    harvests: Vec<Harvest>,
}

/// Process-local store. Clones share the same collections, which lets a test
/// keep a handle while the server owns another.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    collections: Arc<RwLock<Collections>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every harvest currently held, regardless of plant. Not part of
    /// `RecordStore`; tests use it to check for orphaned harvests.
    pub async fn all_harvests(&self) -> Vec<Harvest> {
        self.collections.read().await.harvests.clone()
    }
}

impl RecordStore for InMemoryStore {
    async fn all_plants(&self) -> Result<Vec<Plant>, StoreError> {
        Ok(self.collections.read().await.plants.clone())
    }

    async fn plant(&self, id: PlantId) -> Result<Option<Plant>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.plants.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_plant(&self, plant: &NewPlant) -> Result<PlantId, StoreError> {
        let id = PlantId::new();
        self.collections.write().await.plants.push(Plant {
            id,
            name: plant.name.clone(),
            variety: plant.variety.clone(),
            photo_url: plant.photo_url.clone(),
            date_planted: plant.date_planted.clone(),
        });

        Ok(id)
    }

    async fn update_plant(&self, id: PlantId, plant: &NewPlant) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(existing) = collections.plants.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };

        existing.name = plant.name.clone();
        existing.variety = plant.variety.clone();
        existing.photo_url = plant.photo_url.clone();
        existing.date_planted = plant.date_planted.clone();

        Ok(true)
    }

    async fn delete_plant(&self, id: PlantId) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let before = collections.plants.len();
        collections.plants.retain(|p| p.id != id);
        if collections.plants.len() == before {
            return Ok(false);
        }

        collections.harvests.retain(|h| h.plant_id != id);
        Ok(true)
    }

    async fn harvests_for(&self, plant_id: PlantId) -> Result<Vec<Harvest>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .harvests
            .iter()
            .filter(|h| h.plant_id == plant_id)
            .cloned()
            .collect())
    }

    async fn insert_harvest(
        &self,
        plant_id: PlantId,
        harvest: &NewHarvest,
    ) -> Result<HarvestId, StoreError> {
        let id = HarvestId::new();
        self.collections.write().await.harvests.push(Harvest {
            id,
            plant_id,
            quantity: harvest.quantity.clone(),
            date: harvest.date.clone(),
        });

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tomato() -> NewPlant {
        NewPlant {
            name: "Tomato".to_string(),
            variety: "Roma".to_string(),
            photo_url: "http://x/1.jpg".to_string(),
            date_planted: "2024-01-01".to_string(),
        }
    }

    fn harvest(quantity: &str) -> NewHarvest {
        NewHarvest {
            quantity: quantity.to_string(),
            date: "2024-06-01".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_then_fetch_returns_same_fields() {
        let store = InMemoryStore::new();
        let id = store.insert_plant(&tomato()).await.unwrap();

        let plant = store.plant(id).await.unwrap().unwrap();
        assert_eq!(plant.name, "Tomato");
        assert_eq!(plant.variety, "Roma");
        assert_eq!(plant.photo_url, "http://x/1.jpg");
        assert_eq!(plant.date_planted, "2024-01-01");
        assert_eq!(store.all_plants().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_of_unknown_plant_reports_false() {
        let store = InMemoryStore::new();
        assert!(!store.update_plant(PlantId::new(), &tomato()).await.unwrap());
        assert!(store.all_plants().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_cascades_only_to_own_harvests() {
        let store = InMemoryStore::new();
        let doomed = store.insert_plant(&tomato()).await.unwrap();
        let kept = store.insert_plant(&tomato()).await.unwrap();
        store.insert_harvest(doomed, &harvest("3 tomatoes")).await.unwrap();
        store.insert_harvest(doomed, &harvest("1 tomato")).await.unwrap();
        store.insert_harvest(kept, &harvest("2 tomatoes")).await.unwrap();

        assert!(store.delete_plant(doomed).await.unwrap());

        assert_eq!(store.plant(doomed).await.unwrap(), None);
        assert!(store.harvests_for(doomed).await.unwrap().is_empty());
        let remaining = store.all_harvests().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].plant_id, kept);
    }

    #[tokio::test]
    async fn delete_of_unknown_plant_leaves_harvests_alone() {
        let store = InMemoryStore::new();
        let orphan_target = PlantId::new();
        store.insert_harvest(orphan_target, &harvest("5 beans")).await.unwrap();

        assert!(!store.delete_plant(orphan_target).await.unwrap());
        assert_eq!(store.all_harvests().await.len(), 1);
    }
}
