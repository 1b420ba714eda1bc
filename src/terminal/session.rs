use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use log::{debug, warn};

use crate::error::{GameError, Result};

/// Raw keyboard mode on the alternate screen, held for the whole game.
///
/// Released exactly once: explicitly through [`InputSession::release`], or by
/// `Drop` on any other exit path (errors, interrupts, panics).
pub struct InputSession {
    out: Stdout,
    active: bool,
}

impl InputSession {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        debug!("Terminal session acquired");
        Ok(Self { out, active: true })
    }

    pub fn release(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        debug!("Terminal session released");
        Ok(())
    }

    pub fn width(&self) -> usize {
        terminal::size().map(|(cols, _)| cols as usize).unwrap_or(100)
    }

    pub fn clear(&mut self) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }

    /// Write text as-is. Raw mode needs an explicit carriage return per line.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.replace('\n', "\r\n").as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn write_char(&mut self, ch: char) -> Result<()> {
        if ch == '\n' {
            self.out.write_all(b"\r\n")?;
        } else {
            let mut buf = [0u8; 4];
            self.out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Block until a key is pressed.
    pub fn read_key(&mut self) -> Result<KeyCode> {
        loop {
            if let Some(code) = key_press(event::read()?)? {
                return Ok(code);
            }
        }
    }

    /// Non-blocking: has the player asked to skip the current animation?
    pub fn skip_requested(&mut self) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Some(KeyCode::Char('s' | 'S')) = key_press(event::read()?)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Drop for InputSession {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            warn!("Failed to restore terminal: {err}");
        }
    }
}

/// The key code of a key press, turning Ctrl-C into an interrupt.
fn key_press(event: Event) -> Result<Option<KeyCode>> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => {
            if modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c' | 'C')) {
                return Err(GameError::Interrupted);
            }
            Ok(Some(code))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_key_press() {
        let code = key_press(press(KeyCode::Char('1'), KeyModifiers::NONE)).unwrap();
        assert_eq!(code, Some(KeyCode::Char('1')));
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let result = key_press(press(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(result, Err(GameError::Interrupted)));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_press(Event::Key(key)).unwrap(), None);
        assert_eq!(key_press(Event::FocusGained).unwrap(), None);
    }
}
