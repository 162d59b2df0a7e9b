// Chunk: docs/chunks/terminal_surface - Terminal front end for the launcher
//!
//! Terminal front end built on crossterm.
//!
//! [`TerminalSession`] is an RAII guard over the terminal modes the launcher
//! needs (raw mode, alternate screen, bracketed paste, focus reporting). It is
//! also the [`EventSource`]: crossterm events are mapped to launcher events by
//! the pure [`map_event`] function. [`TerminalRenderer`] paints frames to any
//! writer.
//!
//! # Layout
//!
//! ```text
//! row 0        query line (visible window of the line buffer)
//! row 1..=K    candidate rows, blank past the end of the list
//! ```
//!
//! Every candidate row is exactly `width` columns wide, so a repaint overwrites
//! the previous contents without clearing the line. The query line is at least
//! `width` columns and grows to fit wide characters.

use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;

use crossterm::cursor::{MoveTo, Show};
use crossterm::event::{
    self, DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange,
    Event, KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use thiserror::Error;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use arun_input::{Key, KeyEvent, Modifiers};

use crate::config::{Palette, Rgb};
use crate::event_loop::{EventSource, Renderer};
use crate::launcher_event::LauncherEvent;
use crate::paint::{Frame, QueryLine, RowContent};
use crate::redraw::RedrawDecision;

/// Screen row of the first candidate.
const LIST_TOP: u16 = 1;

/// Failure to obtain the terminal, fatal before the launcher runs.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("standard input and output must be a terminal")]
    NotATerminal,
    #[error("failed to configure the terminal: {0}")]
    Terminal(#[from] io::Error),
}

// =============================================================================
// Session
// =============================================================================

/// Owns the terminal modes for the lifetime of the launcher.
///
/// Modes are restored in reverse order on [`restore`](Self::restore) or drop,
/// whichever comes first.
#[derive(Debug)]
pub struct TerminalSession {
    /// Track what was enabled so we can disable on restore.
    raw_mode: bool,
    alternate_screen: bool,
    bracketed_paste: bool,
    focus_events: bool,
    /// Whether the initial expose has been delivered
    exposed: bool,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen and enables paste and focus
    /// reporting.
    pub fn open() -> Result<Self, SetupError> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(SetupError::NotATerminal);
        }
        install_panic_hook();

        terminal::enable_raw_mode()?;
        let mut session = Self {
            raw_mode: true,
            alternate_screen: false,
            bracketed_paste: false,
            focus_events: false,
            exposed: false,
        };

        // An early return drops `session`, which undoes what was enabled so far
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        session.alternate_screen = true;
        execute!(stdout, EnableBracketedPaste)?;
        session.bracketed_paste = true;
        execute!(stdout, EnableFocusChange)?;
        session.focus_events = true;

        tracing::info!("terminal session opened");
        Ok(session)
    }

    /// Restores the terminal. Safe to call more than once.
    pub fn restore(&mut self) {
        let mut stdout = io::stdout();

        if self.focus_events {
            let _ = execute!(stdout, DisableFocusChange);
            self.focus_events = false;
        }
        if self.bracketed_paste {
            let _ = execute!(stdout, DisableBracketedPaste);
            self.bracketed_paste = false;
        }

        // Always show cursor before leaving
        let _ = execute!(stdout, ResetColor, Show);

        if self.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
            self.alternate_screen = false;
        }
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
            self.raw_mode = false;
            tracing::info!("terminal session restored");
        }
        let _ = stdout.flush();
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}

impl EventSource for TerminalSession {
    /// The first event is always an expose, so the launcher paints before the
    /// first key press.
    fn next_event(&mut self) -> io::Result<Option<LauncherEvent>> {
        if !self.exposed {
            self.exposed = true;
            return Ok(Some(LauncherEvent::Expose));
        }
        loop {
            if let Some(event) = map_event(event::read()?) {
                return Ok(Some(event));
            }
        }
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableFocusChange, DisableBracketedPaste, ResetColor, Show);
    let _ = execute!(stdout, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = stdout.flush();
}

// =============================================================================
// Event mapping
// =============================================================================

/// Maps a crossterm event to a launcher event.
///
/// Key releases, mouse events and focus gain are dropped.
pub fn map_event(event: Event) -> Option<LauncherEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(&key).map(LauncherEvent::Key),
        Event::Paste(text) => Some(LauncherEvent::Paste(text)),
        Event::Resize(..) => Some(LauncherEvent::Expose),
        Event::FocusLost => Some(LauncherEvent::FocusLost),
        _ => None,
    }
}

/// Maps a crossterm key event to the launcher's key vocabulary.
pub fn map_key(key: &event::KeyEvent) -> Option<KeyEvent> {
    let mut modifiers = Modifiers {
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
        control: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
    };

    let mapped = match key.code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Enter => Key::Return,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => {
            modifiers.shift = true;
            Key::Tab
        }
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(KeyEvent::new(mapped, modifiers))
}

// =============================================================================
// Renderer
// =============================================================================

/// Paints frames as a `width`-column panel in the top-left corner.
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    out: W,
    palette: Palette,
    width: usize,
    /// Screen column of the text cursor on the query line
    cursor_column: u16,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, palette: Palette, width: usize) -> Self {
        Self {
            out,
            palette,
            width,
            cursor_column: 0,
        }
    }

    /// Returns the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn paint_row(&mut self, row: u16, text: &str, fg: Rgb, bg: Rgb) -> io::Result<()> {
        let text = fit(text, self.width);
        queue!(
            self.out,
            MoveTo(0, row),
            SetForegroundColor(color(fg)),
            SetBackgroundColor(color(bg)),
            Print(text)
        )
    }

    /// Paints the query line on row 0.
    ///
    /// The line window holds a fixed number of characters, so wide characters
    /// can make it wider than the panel. The row grows to fit and the rest of
    /// the terminal line is cleared, so a narrower repaint leaves nothing behind.
    fn paint_line(&mut self, line: &QueryLine) -> io::Result<()> {
        let palette = self.palette;
        let columns = self.width.max(line.text.width());
        let text = fit(&line.text, columns);
        queue!(
            self.out,
            MoveTo(0, 0),
            SetForegroundColor(color(palette.foreground)),
            SetBackgroundColor(color(palette.background)),
            Print(text),
            Clear(ClearType::UntilNewLine)
        )?;
        self.cursor_column = to_u16(column_of(&line.text, line.cursor_column));
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn paint(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let palette = self.palette;

        // A full repaint that includes the line covers everything we own
        if frame.list == RedrawDecision::Full && frame.line.is_some() {
            queue!(
                self.out,
                SetBackgroundColor(color(palette.background)),
                Clear(ClearType::All)
            )?;
        }

        if let Some(line) = &frame.line {
            self.paint_line(line)?;
        }

        for row in &frame.rows {
            let (text, fg, bg) = match row.content {
                RowContent::Candidate {
                    text,
                    highlighted: true,
                } => (text, palette.selected_foreground, palette.selected_background),
                RowContent::Candidate { text, .. } => (text, palette.foreground, palette.background),
                RowContent::Blank => ("", palette.foreground, palette.background),
            };
            self.paint_row(LIST_TOP.saturating_add(to_u16(row.screen_row)), text, fg, bg)?;
        }

        queue!(self.out, ResetColor, MoveTo(self.cursor_column, 0), Show)?;
        self.out.flush()
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Truncates `text` to `width` display columns and pads it with spaces to
/// exactly `width`.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Display column of the character index `chars` within `text`.
fn column_of(text: &str, chars: usize) -> usize {
    text.chars()
        .take(chars)
        .map(|ch| ch.width().unwrap_or(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LauncherConfig;
    use crate::paint::PaintRow;
    use crossterm::event::KeyEvent as CtKeyEvent;

    fn renderer() -> TerminalRenderer<Vec<u8>> {
        let palette = LauncherConfig::default().palette().unwrap();
        TerminalRenderer::new(Vec::new(), palette, 8)
    }

    fn output(renderer: &TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8_lossy(renderer.get_ref()).into_owned()
    }

    // ==================== Key mapping ====================

    #[test]
    fn test_map_plain_char() {
        let key = CtKeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(map_key(&key), Some(KeyEvent::char('x')));
    }

    #[test]
    fn test_map_ctrl_char() {
        let key = CtKeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&key), Some(KeyEvent::ctrl('w')));
    }

    #[test]
    fn test_map_backtab_is_shift_tab() {
        let key = CtKeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        let mapped = map_key(&key).unwrap();
        assert_eq!(mapped.key, Key::Tab);
        assert!(mapped.modifiers.shift);
    }

    #[test]
    fn test_map_enter_and_escape() {
        let enter = CtKeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(&enter), Some(KeyEvent::plain(Key::Return)));
        let esc = CtKeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(&esc), Some(KeyEvent::plain(Key::Escape)));
    }

    #[test]
    fn test_unmapped_key_is_dropped() {
        let key = CtKeyEvent::new(KeyCode::CapsLock, KeyModifiers::NONE);
        assert_eq!(map_key(&key), None);
    }

    // ==================== Event mapping ====================

    #[test]
    fn test_release_is_dropped() {
        let key = CtKeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(map_event(Event::Key(key)), None);
    }

    #[test]
    fn test_surface_events() {
        assert_eq!(map_event(Event::Resize(80, 24)), Some(LauncherEvent::Expose));
        assert_eq!(map_event(Event::FocusLost), Some(LauncherEvent::FocusLost));
        assert_eq!(map_event(Event::FocusGained), None);
        assert_eq!(
            map_event(Event::Paste("ls".to_owned())),
            Some(LauncherEvent::Paste("ls".to_owned()))
        );
    }

    // ==================== Text fitting ====================

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("", 2), "  ");
    }

    #[test]
    fn test_fit_counts_wide_chars() {
        assert_eq!(fit("日本語", 4), "日本");
        assert_eq!(fit("日本語", 5), "日本 ");
    }

    #[test]
    fn test_column_of_wide_chars() {
        assert_eq!(column_of("ab", 2), 2);
        assert_eq!(column_of("日本", 1), 2);
    }

    // ==================== Painting ====================

    #[test]
    fn test_paint_rows_and_line() {
        let mut renderer = renderer();
        let frame = Frame {
            list: RedrawDecision::Full,
            line: Some(QueryLine {
                text: "c".to_owned(),
                cursor_column: 1,
            }),
            rows: vec![
                PaintRow {
                    screen_row: 0,
                    content: RowContent::Candidate {
                        text: "cat",
                        highlighted: true,
                    },
                },
                PaintRow {
                    screen_row: 1,
                    content: RowContent::Blank,
                },
            ],
        };
        renderer.paint(&frame).unwrap();
        let out = output(&renderer);
        assert!(out.contains("c       "));
        assert!(out.contains("cat     "));
        assert_eq!(renderer.cursor_column, 1);
    }

    #[test]
    fn test_wide_query_line_is_not_truncated() {
        // Four characters fill the line window but take seven columns
        let palette = LauncherConfig::default().palette().unwrap();
        let mut renderer = TerminalRenderer::new(Vec::new(), palette, 4);
        let frame = Frame {
            list: RedrawDecision::None,
            line: Some(QueryLine {
                text: "日本語x".to_owned(),
                cursor_column: 4,
            }),
            rows: Vec::new(),
        };
        renderer.paint(&frame).unwrap();
        assert!(output(&renderer).contains("日本語x"));
        assert_eq!(renderer.cursor_column, 7);

        // Cursor between the wide characters
        let frame = Frame {
            list: RedrawDecision::None,
            line: Some(QueryLine {
                text: "日本語x".to_owned(),
                cursor_column: 2,
            }),
            rows: Vec::new(),
        };
        renderer.paint(&frame).unwrap();
        assert_eq!(renderer.cursor_column, 4);
    }

    #[test]
    fn test_narrow_query_line_is_padded_to_panel_width() {
        let mut renderer = renderer();
        let frame = Frame {
            list: RedrawDecision::None,
            line: Some(QueryLine {
                text: "ls".to_owned(),
                cursor_column: 2,
            }),
            rows: Vec::new(),
        };
        renderer.paint(&frame).unwrap();
        assert!(output(&renderer).contains("ls      "));
        assert_eq!(renderer.cursor_column, 2);
    }

    #[test]
    fn test_empty_frame_only_moves_cursor() {
        let mut renderer = renderer();
        renderer.paint(&Frame::default()).unwrap();
        let out = output(&renderer);
        assert!(!out.contains("  "));
    }
}
