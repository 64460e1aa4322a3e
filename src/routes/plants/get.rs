use crate::domain::{Harvest, Plant};
use crate::error::AppError;
use crate::routes::common::{find_plant, render};
use crate::store::RecordStore;
use actix_web::{HttpResponse, web};
use askama_actix::Template;

#[derive(Template)]
#[template(path = "plants_list.html")]
struct PlantsListHtml {
    plants: Vec<Plant>,
}

#[derive(Template)]
#[template(path = "detail.html")]
struct DetailHtml {
    plant: Plant,
    harvests: Vec<Harvest>,
}

#[tracing::instrument(name = "Listing plants", skip_all)]
pub async fn list_plants<S: RecordStore>(store: web::Data<S>) -> Result<HttpResponse, AppError> {
    let plants = store.all_plants().await?;
    tracing::debug!(count = plants.len(), "Fetched plants");

    render(&PlantsListHtml { plants })
}

#[tracing::instrument(name = "Showing plant", skip_all, fields(plant_id = %path))]
pub async fn plant_detail<S: RecordStore>(
    store: web::Data<S>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let plant = find_plant(store.get_ref(), &path).await?;
    let harvests = store.harvests_for(plant.id).await?;

    render(&DetailHtml { plant, harvests })
}
