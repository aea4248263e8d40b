//! Input capture loop. Runs on its own thread, blocked on the terminal, and
//! feeds directions into the key channel.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyModifiers};
use log::{debug, warn};
#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGQUIT};
use signal_hook::consts::{SIGINT, SIGTERM};

use crate::coords::Direction::{self, *};
use crate::keys::KeySender;

/// Set by the input thread when the player asks to quit with Ctrl+C, or by a
/// termination signal. Raw mode delivers Ctrl+C as a key instead of SIGINT.
#[derive(Clone, Default)]
pub struct QuitSignal(Arc<AtomicBool>);

impl QuitSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Routes termination signals into the flag, so a `kill` ends the game
    /// loop and the terminal still gets restored.
    pub fn register_signals(&self) -> io::Result<()> {
        for &signal in TERMINATION_SIGNALS {
            signal_hook::flag::register(signal, Arc::clone(&self.0))?;
        }
        Ok(())
    }
}

#[cfg(unix)]
const TERMINATION_SIGNALS: &[i32] = &[SIGINT, SIGTERM, SIGHUP, SIGQUIT];
#[cfg(not(unix))]
const TERMINATION_SIGNALS: &[i32] = &[SIGINT, SIGTERM];

#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Quit,
    Ignore
}

pub fn map_key(ev: &KeyEvent) -> KeyAction {
    if is_ctrl_c(ev) {
        return KeyAction::Quit;
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => KeyAction::Turn(Up),
        KeyCode::Char('a') | KeyCode::Left => KeyAction::Turn(Left),
        KeyCode::Char('s') | KeyCode::Down => KeyAction::Turn(Down),
        KeyCode::Char('d') | KeyCode::Right => KeyAction::Turn(Right),
        _ => KeyAction::Ignore,
    }
}

pub fn spawn_input_thread(keys: KeySender, quit: QuitSignal) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input".into())
        .spawn(move || capture_loop(keys, quit))
}

fn capture_loop(keys: KeySender, quit: QuitSignal) {
    loop {
        let ev = match read() {
            Ok(Event::Key(ev)) => ev,
            Ok(_) => continue,
            Err(e) => {
                warn!("reading terminal input failed, no more key presses: {}", e);
                return;
            }
        };

        match map_key(&ev) {
            KeyAction::Turn(direction) => {
                // Receiver gone means the game loop finished
                if !keys.push(direction) {
                    return;
                }
            }
            KeyAction::Quit => {
                quit.request();
                return;
            }
            KeyAction::Ignore => debug!("ignoring keypress {:?}", ev.code),
        }
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
