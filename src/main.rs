use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use zerodesk::app::Desktop;
use zerodesk::kernel::services::adapters::{
    get_cookie_jar_path, get_storage_dir, CookieJarStorage, DirStorage, MemoryStorage,
    MirroredStorage, SceneSurface, SystemClock,
};
use zerodesk::kernel::services::ports::{DesktopConfig, KeyValueStorage};
use zerodesk::kernel::{FileStore, SettingsStore, Store};
use zerodesk::tui::palette::{detect_color_support, ColorSupport};
use zerodesk::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use zerodesk::tui::{crossterm as tui_input, render};

mod logging;

const FRAME_INTERVAL: Duration = Duration::from_millis(50);
const COOKIE_JAR_FILE: &str = "cookies.json";

fn main() -> io::Result<()> {
    let log_guard = logging::init();
    let config = DesktopConfig::from_env();

    let store = Store::new(
        config.clone(),
        FileStore::load(open_storage(&config)),
        SettingsStore::load(open_storage(&config)),
        Box::new(SystemClock),
    );
    let mut desktop = Desktop::new(store, SceneSurface::new());

    let guard = TerminalGuard::desktop()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signals =
        zerodesk::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let support = detect_color_support();
    let size = terminal.size()?;
    desktop.set_viewport(size.width, size.height);
    desktop.boot();

    let result = run(&mut terminal, &mut desktop, &signal_rx, support);
    drop(guard);
    let signal = match result {
        Ok(signal) => signal,
        Err(err) => {
            tracing::error!(error = %err, "event loop failed");
            return Err(err);
        }
    };
    tracing::info!("desktop closed");
    if let Some(signal) = signal {
        drop(log_guard);
        std::process::exit(signal.exit_code());
    }
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    desktop: &mut Desktop<SceneSurface>,
    signals: &mpsc::Receiver<TerminationSignal>,
    support: ColorSupport,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;
    loop {
        if let Ok(signal) = signals.try_recv() {
            tracing::info!(?signal, "termination signal");
            return Ok(Some(signal));
        }

        if dirty {
            terminal.draw(|frame| render::render(frame, desktop, support))?;
            dirty = false;
        }

        if crossterm::event::poll(FRAME_INTERVAL)? {
            // Drain whatever queued up while drawing before the next frame.
            loop {
                let event = crossterm::event::read()?;
                if let Some(input) = tui_input::into_input_event(event) {
                    dirty |= desktop.handle_input(&input);
                }
                if !crossterm::event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        dirty |= desktop.tick();
        if desktop.should_quit() {
            return Ok(None);
        }
    }
}

/// Directory storage mirrored into a cookie-jar file; memory only when no platform
/// directory is known.
fn open_storage(config: &DesktopConfig) -> Box<dyn KeyValueStorage> {
    let (primary, jar): (Option<PathBuf>, Option<PathBuf>) = match config.data_dir.as_ref() {
        Some(dir) => (Some(dir.clone()), Some(dir.join(COOKIE_JAR_FILE))),
        None => (get_storage_dir(), get_cookie_jar_path()),
    };
    match (primary, jar) {
        (Some(dir), Some(jar)) => Box::new(MirroredStorage::new(
            Box::new(DirStorage::new(dir)),
            Box::new(CookieJarStorage::new(jar)),
        )),
        (Some(dir), None) => Box::new(DirStorage::new(dir)),
        (None, Some(jar)) => Box::new(CookieJarStorage::new(jar)),
        (None, None) => {
            tracing::warn!("no storage directory; desktop state will not persist");
            Box::new(MemoryStorage::new())
        }
    }
}
