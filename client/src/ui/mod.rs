mod app;
mod egui_renderer;

pub use app::TicTacToeApp;
pub use egui_renderer::EguiRenderer;
