use crate::domain::NewHarvest;
use crate::error::AppError;
use crate::routes::common::{parse_plant_id, plant_location, redirect_to};
use crate::store::RecordStore;
use actix_web::HttpResponse;
use actix_web::web::{self, Form};

/// Records a harvest against the plant id in the path. The plant itself is
/// not looked up.
#[tracing::instrument(name = "Recording harvest", skip_all, fields(plant_id = %path))]
pub async fn insert_harvest<S: RecordStore>(
    store: web::Data<S>,
    path: web::Path<String>,
    new_harvest: Form<NewHarvest>,
) -> Result<HttpResponse, AppError> {
    let plant_id = parse_plant_id(&path)?;
    let harvest_id = store.insert_harvest(plant_id, &new_harvest).await?;
    tracing::info!(?harvest_id, "Harvest recorded");

    Ok(redirect_to(plant_location(plant_id)))
}
