mod delete;
mod edit;
mod get;
mod post;

pub use delete::delete_plant;
pub use edit::{edit_form, edit_plant};
pub use get::{list_plants, plant_detail};
pub use post::{create_form, insert_plant};
