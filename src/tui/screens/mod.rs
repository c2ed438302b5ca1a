//! Screen implementations.

mod in_game;
mod main_menu;

pub use in_game::InGameScreen;
pub use main_menu::MainMenuScreen;
