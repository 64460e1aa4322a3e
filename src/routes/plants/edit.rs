use crate::domain::{NewPlant, Plant};
use crate::error::AppError;
use crate::routes::common::{find_plant, plant_location, redirect_to, render};
use crate::store::RecordStore;
use actix_web::{HttpResponse, web};
use askama_actix::Template;

#[derive(Template)]
#[template(path = "edit.html")]
struct EditHtml {
    plant: Plant,
}

#[tracing::instrument(name = "Showing edit form", skip_all, fields(plant_id = %path))]
pub async fn edit_form<S: RecordStore>(
    store: web::Data<S>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let plant = find_plant(store.get_ref(), &path).await?;

    render(&EditHtml { plant })
}

/// Replaces all four fields, nothing from the old record is kept.
///
/// The plant is looked up before the form body is checked, so an unknown id
/// is a 404 even when the body is incomplete. A body error is the
/// `AppError::BadRequest` produced by the router's `FormConfig`.
#[tracing::instrument(name = "Editing plant", skip_all, fields(plant_id = %path))]
pub async fn edit_plant<S: RecordStore>(
    store: web::Data<S>,
    path: web::Path<String>,
    form: Result<web::Form<NewPlant>, actix_web::Error>,
) -> Result<HttpResponse, actix_web::Error> {
    let plant = find_plant(store.get_ref(), &path).await?;
    let form = form?;

    let updated = store
        .update_plant(plant.id, &form)
        .await
        .map_err(AppError::from)?;
    if !updated {
        // Deleted between the lookup and the update.
        return Err(AppError::NotFound(plant.id.to_string()).into());
    }

    Ok(redirect_to(plant_location(plant.id)))
}
