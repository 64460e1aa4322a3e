use crate::domain::NewPlant;
use crate::error::AppError;
use crate::routes::common::{plant_location, redirect_to};
use crate::store::RecordStore;
use actix_web::HttpResponse;
use actix_web::web::{self, Form};
use askama_actix::{Template, TemplateToResponse};

#[derive(Template)]
#[template(path = "create.html")]
struct CreateHtml;

pub async fn create_form() -> HttpResponse {
    CreateHtml.to_response()
}

#[tracing::instrument(name = "Adding a new plant", skip_all, fields(plant_name = %new_plant.name))]
pub async fn insert_plant<S: RecordStore>(
    store: web::Data<S>,
    new_plant: Form<NewPlant>,
) -> Result<HttpResponse, AppError> {
    let plant_id = store.insert_plant(&new_plant).await?;
    tracing::info!(%plant_id, "Plant created");

    Ok(redirect_to(plant_location(plant_id)))
}
