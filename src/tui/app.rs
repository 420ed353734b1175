use crate::logging;
use crate::picker::{Picker, PickerEvent};
use crate::tui::list::ListCursor;
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::time::Instant;

/// Interactive picker session: owns the core state machine plus the
/// view-only state (cursor, focus, input caret) the core doesn't know
/// about.
pub struct TuiApp {
    pub picker: Picker,
    pub cursor: ListCursor,
    pub search_focused: bool,
    /// Byte offset of the caret within the raw search text
    pub input_cursor: usize,
    pub status_message: String,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new(picker: Picker) -> Self {
        let mut cursor = ListCursor::default();
        cursor.reset(picker.visible_len());
        Self {
            picker,
            cursor,
            search_focused: true,
            input_cursor: 0,
            status_message: "Ready".to_string(),
            should_quit: false,
        }
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend<Error = std::io::Error>>,
    ) -> crate::Result<()> {
        let tick_rate = self.picker.config().tick_rate;
        let mut last_tick = Instant::now();

        logging::info(
            "TUI",
            &format!("picker started with {} items", self.picker.total_len()),
        );

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    self.handle_key(key);
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if self.picker.handle(PickerEvent::Tick, Instant::now()) {
                    self.after_refilter();
                }
                last_tick = Instant::now();
            }

            if self.should_quit {
                logging::info(
                    "TUI",
                    &format!("picker closed, {} selected", self.picker.selected_count()),
                );
                return Ok(());
            }
        }
    }

    fn after_refilter(&mut self) {
        self.cursor.reset(self.picker.visible_len());
    }

    fn clear_search(&mut self) {
        if self.picker.handle(PickerEvent::ClearPressed, Instant::now()) {
            self.after_refilter();
        }
        self.input_cursor = 0;
    }

    fn set_text(&mut self, text: String) {
        self.picker
            .handle(PickerEvent::TextChanged(text), Instant::now());
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if !self.picker.raw_text().is_empty() {
                    self.clear_search();
                } else if self.search_focused {
                    self.search_focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.search_focused {
            self.handle_search_key(key);
        } else {
            self.handle_list_key(key);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let text = self.picker.raw_text().to_string();
        match key.code {
            KeyCode::Char(c) => {
                let mut text = text;
                text.insert(self.input_cursor, c);
                self.input_cursor += c.len_utf8();
                self.set_text(text);
            }
            KeyCode::Backspace => {
                if self.input_cursor > 0 {
                    // Find the previous character boundary
                    let prev = text[..self.input_cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    let mut text = text;
                    text.remove(prev);
                    self.input_cursor = prev;
                    self.set_text(text);
                }
            }
            KeyCode::Delete => {
                if self.input_cursor < text.len() {
                    let mut text = text;
                    text.remove(self.input_cursor);
                    self.set_text(text);
                }
            }
            KeyCode::Left => {
                if self.input_cursor > 0 {
                    let prev = text[..self.input_cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.input_cursor = prev;
                }
            }
            KeyCode::Right => {
                if self.input_cursor < text.len() {
                    let next = text[self.input_cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.input_cursor + i)
                        .unwrap_or(text.len());
                    self.input_cursor = next;
                }
            }
            KeyCode::Home => {
                self.input_cursor = 0;
            }
            KeyCode::End => {
                self.input_cursor = text.len();
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.search_focused = false;
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let total = self.picker.visible_len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.cursor.select_next(total),
            KeyCode::PageUp => self.cursor.page_up(),
            KeyCode::PageDown => self.cursor.page_down(total),
            KeyCode::Home => self.cursor.select_first(),
            KeyCode::End => self.cursor.select_last(total),

            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_under_cursor(),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search_focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search_focused = true;
                let mut text = self.picker.raw_text().to_string();
                text.push(c);
                self.input_cursor = text.len();
                self.set_text(text);
            }

            _ => {}
        }
    }

    fn toggle_under_cursor(&mut self) {
        let Some(pos) = self.cursor.selected else {
            return;
        };
        let Some(item) = self.picker.visible_item(pos) else {
            return;
        };
        let (id, name) = (item.id, item.name.clone());
        self.picker
            .handle(PickerEvent::ItemTapped(id), Instant::now());
        self.status_message = if self.picker.is_selected(id) {
            format!("Selected '{}'", name)
        } else {
            format!("Deselected '{}'", name)
        };
    }
}
