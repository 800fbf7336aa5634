//! Keyboard handling.
//!
//! | Key | Action |
//! |-----|--------|
//! | `h` | Home |
//! | `s` | Ships |
//! | `g`, `:` | Open the address bar |
//! | `Enter` | Follow the selected link / go to the typed path |
//! | `Esc` | Close the address bar |
//! | `Up`/`k`, `Down`/`j` | Move the list selection |
//! | `b`, `Backspace`, `Alt+Left` | Back |
//! | `f`, `Alt+Right` | Forward |
//! | `r` | Reload the page |
//! | `q`, `Ctrl+C` | Quit |

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::router::SHIPS_PATH;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.needs_redraw = true;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.address_bar.is_open() {
            self.handle_address_key(key);
            return;
        }

        let alt = key.modifiers.contains(KeyModifiers::ALT);
        // Letter commands only fire unmodified (Shift aside).
        let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
        if matches!(key.code, KeyCode::Char(_)) && !plain {
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('h') => self.navigate("/"),
            KeyCode::Char('s') => self.navigate(SHIPS_PATH),
            KeyCode::Char('g') | KeyCode::Char(':') => {
                let current = self.current_path().to_string();
                self.address_bar.open(&current);
            }
            KeyCode::Left if alt => {
                self.back();
            }
            KeyCode::Right if alt => {
                self.forward();
            }
            KeyCode::Char('b') | KeyCode::Backspace => {
                self.back();
            }
            KeyCode::Char('f') => {
                self.forward();
            }
            KeyCode::Char('r') => self.reload(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter => {
                self.open_selected();
            }
            _ => {}
        }
    }

    fn handle_address_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.address_bar.close(),
            KeyCode::Enter => self.submit_address(),
            KeyCode::Backspace => self.address_bar.backspace(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.address_bar.clear()
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.address_bar.push(c)
            }
            _ => {}
        }
    }
}
