mod catalog;
mod input;
mod nav;

pub use catalog::CatalogController;
pub use input::InputController;
pub use nav::NavController;
