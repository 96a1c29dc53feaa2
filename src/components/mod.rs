pub mod app;
pub mod grid_view;

pub use app::App;
