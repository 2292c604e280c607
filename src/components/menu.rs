use bevy_ecs::prelude::Component;

use crate::geometry::Rect;

/// What a menu button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Enter the Playing state and reset the level.
    StartGame,
    /// Pause or resume the background music.
    ToggleMusic,
    /// Ask the host to terminate.
    Exit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuButton {
    pub label: String,
    pub rect: Rect,
    pub action: MenuAction,
}

impl MenuButton {
    pub fn new(label: impl Into<String>, rect: Rect, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            rect,
            action,
        }
    }
}

/// Clickable main menu: a title and a list of buttons.
///
/// Buttons are hit-tested in list order and are not expected to overlap.
#[derive(Component, Clone, Debug)]
pub struct Menu {
    pub title: String,
    pub title_position: (f32, f32),
    pub title_size: f32,
    pub label_size: f32,
    pub buttons: Vec<MenuButton>,
}

impl Menu {
    pub fn new(title: impl Into<String>, title_position: (f32, f32)) -> Self {
        Self {
            title: title.into(),
            title_position,
            title_size: 48.0,
            label_size: 30.0,
            buttons: Vec::new(),
        }
    }

    pub fn with_button(mut self, label: impl Into<String>, rect: Rect, action: MenuAction) -> Self {
        self.buttons.push(MenuButton::new(label, rect, action));
        self
    }

    /// The main menu of the game, centered horizontally on a screen of
    /// `screen_width` units.
    pub fn main_menu(screen_width: f32) -> Self {
        let x = screen_width * 0.5 - 100.0;
        Menu::new("Platformer Test", (screen_width * 0.5, 90.0))
            .with_button("Start Game", Rect::new(x, 160.0, 200.0, 50.0), MenuAction::StartGame)
            .with_button(
                "Music ON / OFF",
                Rect::new(x, 230.0, 200.0, 50.0),
                MenuAction::ToggleMusic,
            )
            .with_button("Exit", Rect::new(x, 300.0, 200.0, 50.0), MenuAction::Exit)
    }

    /// First button, in list order, containing the point.
    pub fn button_at(&self, x: f32, y: f32) -> Option<&MenuButton> {
        self.buttons.iter().find(|b| b.rect.contains_point(x, y))
    }
}
