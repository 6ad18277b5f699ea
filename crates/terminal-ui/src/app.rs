use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use data_organizer::services::organizer_service::DataOrganizer;
use log::{debug, error};

use crate::data::{stateful_list::StatefulList, Stateful};

pub struct PopupInteraction {
    pub message: String,
    pub calling_module: Module,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Module {
    Buttons,
    ErrorPopup,
}

/* One button per user action */
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Random,
    Maximum,
    Minimum,
    Remove,
    Sort,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Random => "Random",
            Action::Maximum => "Maximum",
            Action::Minimum => "Minimum",
            Action::Remove => "Remove",
            Action::Sort => "Sort",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Action::Random => 'r',
            Action::Maximum => 'x',
            Action::Minimum => 'n',
            Action::Remove => 'd',
            Action::Sort => 's',
        }
    }
}

/// State of the application: the organizer it drives, the button panel and
/// the status line shown under the collection.
pub struct App {
    pub organizer: Arc<dyn DataOrganizer + Send + Sync>,

    pub selected_module: Module,
    pub buttons: StatefulList<Action>,
    /// Button drawn as pressed until the next tick
    pub pressed: Option<Action>,
    pub status: String,

    pub show_error_message: bool,
    pub popup: PopupInteraction,
}

impl App {
    pub fn new(organizer: Arc<dyn DataOrganizer + Send + Sync>) -> App {
        let mut buttons = vec![
            Action::Random,
            Action::Maximum,
            Action::Minimum,
            Action::Remove,
        ];
        if organizer.is_sortable() {
            buttons.push(Action::Sort);
        }

        App {
            organizer,
            selected_module: Module::Buttons,
            buttons: StatefulList::with_items(buttons),
            pressed: None,
            status: String::new(),
            show_error_message: false,
            popup: PopupInteraction {
                message: String::new(),
                calling_module: Module::Buttons,
            },
        }
    }

    pub fn on_tick(&mut self) {
        self.pressed = None;
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        match self.selected_module {
            Module::Buttons => self.handle_buttons_input(key),
            Module::ErrorPopup => self.handle_error_popup_input(key),
        }
    }

    fn handle_buttons_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.buttons.previous();
            }
            KeyCode::Down => {
                self.buttons.next();
            }
            KeyCode::Enter => {
                if let Some(action) = self.buttons.get_selected_item() {
                    self.trigger(action)
                }
            }
            KeyCode::Char(c) => {
                let action = self
                    .buttons
                    .items
                    .iter()
                    .copied()
                    .find(|action| action.shortcut() == c);
                match action {
                    Some(action) => self.trigger(action),
                    None => self.status = "What?".to_string(),
                }
            }
            _ => self.status = "What?".to_string(),
        }
    }

    fn handle_error_popup_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.show_error_message = false;
                self.selected_module = self.popup.calling_module;
            }
            _ => {}
        }
    }

    pub fn trigger(&mut self, action: Action) {
        debug!("{} pressed", action.label());
        self.status.clear();
        self.pressed = Some(action);

        if let Err(err) = self.run_action(action) {
            error!("{} failed: {:?}", action.label(), err);
            self.show_error_message = true;
            self.popup.message = format!("{}", err);
            self.popup.calling_module = self.selected_module;
            self.selected_module = Module::ErrorPopup;
        }
    }

    fn run_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Random => self.organizer.random_action()?,
            Action::Maximum => {
                self.organizer.maximum_action();
            }
            Action::Minimum => {
                self.organizer.minimum_action();
            }
            Action::Remove => self.organizer.remove_action(),
            Action::Sort => self.organizer.sort_action()?,
        }
        Ok(())
    }

    /// Value of the selected element, if any
    pub fn selected_value(&self) -> Option<i64> {
        self.organizer
            .get_elements()
            .iter()
            .find(|element| element.is_highlighted())
            .map(|element| element.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use data_organizer::models::settings::Settings;
    use data_organizer::services::organizer_service::OrganizerService;

    fn app(sortable: bool) -> App {
        let organizer = OrganizerService::new(Settings {
            sortable,
            seed: Some(1),
            ..Default::default()
        });
        App::new(Arc::new(organizer))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_input(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn values(app: &App) -> Vec<i64> {
        app.organizer.get_elements().iter().map(|e| e.value()).collect()
    }

    #[test]
    fn sort_button_only_when_sortable() {
        assert!(app(true).buttons.items.contains(&Action::Sort));
        assert!(!app(false).buttons.items.contains(&Action::Sort));
    }

    #[test]
    fn shortcuts_drive_the_organizer() {
        let mut app = app(true);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(values(&app).len(), 10);
        assert_eq!(app.selected_value(), None);

        press(&mut app, KeyCode::Char('x'));
        let maximum = *values(&app).iter().max().unwrap();
        assert_eq!(app.selected_value(), Some(maximum));

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(values(&app).len(), 9);
        assert_eq!(app.selected_value(), None);

        press(&mut app, KeyCode::Char('s'));
        let sorted = values(&app);
        assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn enter_triggers_selected_button() {
        let mut app = app(true);
        press(&mut app, KeyCode::Enter);
        assert_eq!(values(&app).len(), 10);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        let minimum = *values(&app).iter().min().unwrap();
        assert_eq!(app.selected_value(), Some(minimum));
        assert_eq!(app.pressed, Some(Action::Minimum));
    }

    #[test]
    fn unknown_key_shows_what() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.status, "What?");

        press(&mut app, KeyCode::Char('r'));
        assert!(app.status.is_empty());
    }

    #[test]
    fn tick_releases_button() {
        let mut app = app(true);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.pressed, Some(Action::Random));

        app.on_tick();
        assert!(app.pressed.is_none());
    }

    #[test]
    fn error_popup_returns_to_buttons() {
        let mut app = app(true);
        app.show_error_message = true;
        app.popup.message = "boom".to_string();
        app.selected_module = Module::ErrorPopup;

        press(&mut app, KeyCode::Char('r'));
        assert!(values(&app).is_empty());

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_error_message);
        assert_eq!(app.selected_module, Module::Buttons);
    }
}
