use crate::clipboard::copy_to_clipboard;
use crate::events::{Event, EventHandler};
use crate::keyboard::{PickerAction, PickerState};
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mojipad_core::{AppConfig, MojipadResult};
use mojipad_editor::{filter_to_allowed, is_disallowed, EditBuffer, RecentEmoji};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use unicode_segmentation::UnicodeSegmentation;

/// Which screen the router currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Login,
    Register,
    Compose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterFocus {
    Nickname,
    DisplayName,
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub nickname: EditBuffer,
    pub display_name: EditBuffer,
    pub register_focus: RegisterFocus,
    pub compose: EditBuffer,
    pub picker: PickerState,
    pub picker_open: bool,
    pub recents: RecentEmoji,
    pub status: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let mut nickname = EditBuffer::new();
        if let Some(prefill) = config.nickname.as_deref() {
            nickname.set(prefill.to_string());
        }
        Self {
            should_quit: false,
            screen: Screen::Splash,
            nickname,
            display_name: EditBuffer::new(),
            register_focus: RegisterFocus::Nickname,
            compose: EditBuffer::new(),
            picker: PickerState::new(config.effective_grid_columns()),
            picker_open: false,
            recents: RecentEmoji::new(config.effective_max_recent()),
            status: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Splash => self.handle_splash_key(),
            Screen::Login => self.handle_login_key(key),
            Screen::Register => self.handle_register_key(key),
            Screen::Compose => self.handle_compose_key(key),
        }
    }

    fn handle_splash_key(&mut self) {
        self.screen = Screen::Login;
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab => {
                self.register_focus = RegisterFocus::Nickname;
                self.screen = Screen::Register;
                self.status = None;
            }
            KeyCode::Enter => {
                if self.nickname.is_empty() {
                    self.status = Some("Nickname cannot be empty".to_string());
                } else {
                    self.enter_compose();
                }
            }
            _ => {
                handle_text_key(&mut self.nickname, key);
            }
        }
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.screen = Screen::Login;
                self.status = None;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.register_focus = match self.register_focus {
                    RegisterFocus::Nickname => RegisterFocus::DisplayName,
                    RegisterFocus::DisplayName => RegisterFocus::Nickname,
                };
            }
            KeyCode::Enter => match self.register_focus {
                RegisterFocus::Nickname => self.register_focus = RegisterFocus::DisplayName,
                RegisterFocus::DisplayName => {
                    if self.nickname.is_empty() || self.display_name.is_empty() {
                        self.status = Some("Both fields are required".to_string());
                    } else {
                        self.enter_compose();
                    }
                }
            },
            _ => {
                let buf = match self.register_focus {
                    RegisterFocus::Nickname => &mut self.nickname,
                    RegisterFocus::DisplayName => &mut self.display_name,
                };
                handle_text_key(buf, key);
            }
        }
    }

    fn handle_compose_key(&mut self, key: KeyEvent) {
        if self.picker_open {
            match self.picker.handle_key(key, &self.recents) {
                PickerAction::Insert(glyph) => {
                    self.compose.insert_str(glyph);
                    self.recents.record(glyph);
                    self.sanitize_compose();
                    tracing::debug!("Inserted {}", glyph);
                }
                PickerAction::Backspace => {
                    self.compose.backspace();
                }
                PickerAction::Close => {
                    self.picker_open = false;
                }
                PickerAction::None => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc => {
                self.screen = Screen::Login;
                self.status = None;
            }
            KeyCode::Char('i') | KeyCode::Char('e') => {
                self.picker_open = true;
            }
            KeyCode::Char('y') => self.copy_compose(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.compose.clear();
                self.status = None;
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.compose.select_all();
            }
            KeyCode::Char(c) => {
                // terminal input bypasses the picker the way the system
                // keyboard bypasses the custom one; vet it per scalar
                if is_disallowed(c) {
                    self.status = Some("Letters, digits, and Hangul are filtered".to_string());
                } else {
                    self.compose.insert_char(c);
                    self.sanitize_compose();
                }
            }
            KeyCode::Backspace => self.compose.backspace(),
            KeyCode::Left => self.compose.move_left(),
            KeyCode::Right => self.compose.move_right(),
            KeyCode::Home => self.compose.move_home(),
            KeyCode::End => self.compose.move_end(),
            _ => {}
        }
    }

    fn enter_compose(&mut self) {
        self.screen = Screen::Compose;
        self.picker_open = true;
        self.status = None;
        tracing::info!("{} entered the compose screen", self.nickname.as_str());
    }

    /// Re-filter the whole compose value, mirroring the on-change hook the
    /// picker-less input path needs. Usually a no-op.
    fn sanitize_compose(&mut self) {
        let cleaned = filter_to_allowed(self.compose.as_str());
        if cleaned.len() != self.compose.as_str().len() {
            let stripped = self.compose.as_str().len() - cleaned.len();
            let cursor = self.compose.cursor().saturating_sub(stripped);
            tracing::debug!("Filter stripped {} bytes", stripped);
            self.compose.set(cleaned);
            self.compose.set_selection(cursor, cursor);
        }
    }

    fn copy_compose(&mut self) {
        if self.compose.is_empty() {
            self.status = Some("Nothing to copy".to_string());
            return;
        }
        match copy_to_clipboard(self.compose.as_str()) {
            Ok(()) => {
                let count = self.compose.as_str().graphemes(true).count();
                self.status = Some(format!("Copied {} emoji to clipboard", count));
            }
            Err(e) => {
                tracing::error!("Clipboard copy failed: {}", e);
                self.status = Some(format!("Clipboard error: {}", e));
            }
        }
    }

    pub async fn run(&mut self) -> MojipadResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => self.handle_key(key),
                    Event::Tick => {}
                }
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

/// Route an ordinary editing key into a text buffer.
fn handle_text_key(buf: &mut EditBuffer, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => buf.insert_char(c),
        KeyCode::Backspace => buf.backspace(),
        KeyCode::Left => buf.move_left(),
        KeyCode::Right => buf.move_right(),
        KeyCode::Home => buf.move_home(),
        KeyCode::End => buf.move_end(),
        _ => {}
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn app() -> App {
        App::new(AppConfig::default())
    }

    #[test]
    fn test_splash_advances_on_any_key() {
        let mut app = app();
        assert_eq!(app.screen, Screen::Splash);
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn test_login_requires_nickname() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter)); // leave splash
        app.handle_key(key(KeyCode::Enter)); // empty nickname
        assert_eq!(app.screen, Screen::Login);
        assert!(app.status.is_some());

        for c in "mochi".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Compose);
        assert!(app.picker_open);
    }

    #[test]
    fn test_login_tab_routes_to_register_and_esc_back() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.screen, Screen::Register);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn test_register_requires_both_fields() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Tab));
        for c in "mochi".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter)); // focus moves to display name
        assert_eq!(app.register_focus, RegisterFocus::DisplayName);
        app.handle_key(key(KeyCode::Enter)); // display name still empty
        assert_eq!(app.screen, Screen::Register);
        assert!(app.status.is_some());

        app.handle_key(key(KeyCode::Char('🌸')));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Compose);
    }

    #[test]
    fn test_picker_insert_updates_buffer_and_recents() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('m')));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Compose);

        app.handle_key(key(KeyCode::Enter)); // picker inserts selected glyph
        assert!(!app.compose.is_empty());
        assert_eq!(app.recents.len(), 1);
        let glyph: String = app.compose.as_str().to_string();
        assert_eq!(app.recents.glyphs().next(), Some(glyph.as_str()));
    }

    #[test]
    fn test_typed_letters_never_reach_compose_buffer() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('m')));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Esc)); // close picker

        app.handle_key(key(KeyCode::Char('!')));
        app.handle_key(key(KeyCode::Char('🔥')));
        assert_eq!(app.compose.as_str(), "!🔥");

        // 'x' is blacklisted, 'q' quits before insertion is even attempted
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.compose.as_str(), "!🔥");
        assert!(app.status.is_some());
    }

    #[test]
    fn test_compose_backspace_goes_through_picker() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('m')));
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(key(KeyCode::Enter)); // insert
        let len_before = app.compose.as_str().len();
        assert!(len_before > 0);
        app.handle_key(key(KeyCode::Backspace));
        assert!(app.compose.as_str().len() < len_before);
    }

    #[test]
    fn test_esc_closes_picker_then_leaves_compose() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('m')));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.picker_open);

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.picker_open);
        assert_eq!(app.screen, Screen::Compose);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn test_quit_only_outside_text_fields() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('q'))); // typed into nickname
        assert!(!app.should_quit);
        assert_eq!(app.nickname.as_str(), "q");

        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Esc)); // close picker
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_u_clears_compose() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('m')));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter)); // insert one glyph
        app.handle_key(key(KeyCode::Esc));

        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(app.compose.is_empty());
    }

    #[test]
    fn test_config_nickname_prefills_login() {
        let config = AppConfig {
            nickname: Some("mochi".to_string()),
            ..Default::default()
        };
        let app = App::new(config);
        assert_eq!(app.nickname.as_str(), "mochi");
    }
}
