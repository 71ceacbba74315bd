mod app;
mod err;
mod utils;

pub use app::App;
