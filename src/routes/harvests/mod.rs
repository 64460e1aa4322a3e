mod post;

pub use post::insert_harvest;
