use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NewHarvest {
    #[serde(rename = "harvested_amount")]
    pub quantity: String,

    #[serde(rename = "date_harvested")]
    pub date: String,
}
