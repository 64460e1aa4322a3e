use crate::error::AppError;
use crate::routes::common::{find_plant, redirect_to};
use crate::store::RecordStore;
use actix_web::{HttpResponse, web};

#[tracing::instrument(name = "Deleting plant", skip_all, fields(plant_id = %path))]
pub async fn delete_plant<S: RecordStore>(
    store: web::Data<S>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let plant = find_plant(store.get_ref(), &path).await?;

    if !store.delete_plant(plant.id).await? {
        return Err(AppError::NotFound(plant.id.to_string()));
    }
    tracing::info!(plant_id = %plant.id, "Plant deleted along with its harvests");

    Ok(redirect_to("/"))
}
