mod harvest;
mod new_harvest;
mod new_plant;
mod plant;

pub use harvest::{Harvest, HarvestId};
pub use new_harvest::NewHarvest;
pub use new_plant::NewPlant;
pub use plant::{Plant, PlantId};
