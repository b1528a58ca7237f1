//! Terminal modes held for the lifetime of the desktop.
//!
//! Every mode switched on at startup is switched off exactly once, whether the desktop quits,
//! panics or is interrupted. A first SIGINT/SIGTERM asks the event loop to shut down; a second one
//! restores the screen and exits on the spot.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Optional screen modes on top of raw mode and the alternate screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenModes {
    pub pointer: bool,
    pub bracketed_paste: bool,
    pub hide_cursor: bool,
}

impl ScreenModes {
    /// Pointer reports for dragging and the dock, pastes as one event, no blinking cursor.
    pub const DESKTOP: Self = Self {
        pointer: true,
        bracketed_paste: true,
        hide_cursor: true,
    };
}

pub trait ScreenBackend: Send + Sync + 'static {
    fn enter(&self, modes: ScreenModes) -> io::Result<()>;
    fn leave(&self, modes: ScreenModes) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermScreen;

impl ScreenBackend for CrosstermScreen {
    fn enter(&self, modes: ScreenModes) -> io::Result<()> {
        use crossterm::event::{EnableBracketedPaste, EnableMouseCapture};
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};
        use crossterm::{cursor, queue};

        enable_raw_mode()?;
        let mut out = io::stdout();
        queue!(out, EnterAlternateScreen)?;
        if modes.pointer {
            queue!(out, EnableMouseCapture)?;
        }
        if modes.bracketed_paste {
            queue!(out, EnableBracketedPaste)?;
        }
        if modes.hide_cursor {
            queue!(out, cursor::Hide)?;
        }
        out.flush()
    }

    fn leave(&self, modes: ScreenModes) -> io::Result<()> {
        use crossterm::event::{DisableBracketedPaste, DisableMouseCapture};
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
        use crossterm::{cursor, queue};

        // Undo in reverse order and keep going past failures; the first one is reported.
        let mut out = io::stdout();
        let steps = [
            modes.hide_cursor.then(|| queue!(out, cursor::Show)),
            modes.bracketed_paste.then(|| queue!(out, DisableBracketedPaste)),
            modes.pointer.then(|| queue!(out, DisableMouseCapture)),
            Some(queue!(out, LeaveAlternateScreen)),
            Some(out.flush()),
            Some(disable_raw_mode()),
        ];
        steps.into_iter().flatten().collect::<io::Result<Vec<()>>>().map(drop)
    }
}

struct Screen {
    backend: Arc<dyn ScreenBackend>,
    modes: ScreenModes,
    restored: AtomicBool,
}

/// Cloneable handle that puts the terminal back; only the first call does anything.
#[derive(Clone)]
pub struct ScreenRestorer {
    screen: Arc<Screen>,
}

impl ScreenRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.screen.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.screen.backend.leave(self.screen.modes)
    }

    pub fn is_restored(&self) -> bool {
        self.screen.restored.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restorer: ScreenRestorer,
}

impl TerminalGuard {
    pub fn desktop() -> io::Result<Self> {
        Self::enter(Arc::new(CrosstermScreen), ScreenModes::DESKTOP)
    }

    pub fn enter(backend: Arc<dyn ScreenBackend>, modes: ScreenModes) -> io::Result<Self> {
        backend.enter(modes)?;
        Ok(Self {
            restorer: ScreenRestorer {
                screen: Arc::new(Screen {
                    backend,
                    modes,
                    restored: AtomicBool::new(false),
                }),
            },
        })
    }

    pub fn restorer(&self) -> ScreenRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalStep {
    /// Hand the signal to the event loop and let it quit normally.
    Shutdown,
    /// Restore the screen and exit with the signal's code.
    Exit(i32),
}

/// The first signal requests a shutdown; a repeat, or nobody left to hear it, forces the exit.
#[derive(Debug, Default)]
pub struct SignalEscalation {
    pending: bool,
}

impl SignalEscalation {
    pub fn next(&mut self, signal: TerminationSignal, loop_alive: bool) -> SignalStep {
        if self.pending || !loop_alive {
            return SignalStep::Exit(signal.exit_code());
        }
        self.pending = true;
        SignalStep::Shutdown
    }
}

#[cfg(unix)]
pub fn install_termination_signals(
    restorer: ScreenRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        let mut escalation = SignalEscalation::default();
        for sig in signals.forever() {
            let signal = match sig {
                SIGINT => TerminationSignal::SigInt,
                SIGTERM => TerminationSignal::SigTerm,
                _ => continue,
            };
            let loop_alive = tx.send(signal).is_ok();
            if let SignalStep::Exit(code) = escalation.next(signal, loop_alive) {
                let _ = restorer.restore();
                std::process::exit(code);
            }
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
