use serde::Deserialize;

/// Form body shared by the create and edit pages. Every field is required,
/// but the values themselves are stored untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlant {
    #[serde(rename = "plant_name")]
    pub name: String,

    pub variety: String,

    #[serde(rename = "photo")]
    pub photo_url: String,

    pub date_planted: String,
}
