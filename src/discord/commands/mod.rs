mod delete_my_data;
mod games;
mod setup;

pub use delete_my_data::delete_my_data;
pub use games::games;
pub use setup::setup;
