use serde::{Deserialize, Serialize};

use super::Validate;
use crate::layout::{Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
}

impl WindowConfig {
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub layout: Layout,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.window.width < 3 || self.window.height < 3 {
            return Err(format!(
                "window must be at least 3x3 pixels, got {}x{}",
                self.window.width, self.window.height
            ));
        }

        let bounds = self.window.bounds();
        for (name, rect) in self.layout.regions() {
            if rect.is_empty() {
                return Err(format!("{} has no area", name));
            }
            if !rect.is_inside(&bounds) {
                return Err(format!(
                    "{} at ({}, {}) size {}x{} does not fit in the window",
                    name, rect.x, rect.y, rect.width, rect.height
                ));
            }
        }

        let (cell_width, cell_height) = self.layout.cell_size();
        if cell_width == 0 || cell_height == 0 {
            return Err("board must be at least 3x3 pixels".to_string());
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let window = WindowConfig {
            width: 600,
            height: 600,
        };
        Self {
            window,
            layout: Layout::for_window(window.width, window.height),
            seed: None,
        }
    }
}
