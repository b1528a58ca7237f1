use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingScreen {
    calls: Mutex<Vec<(&'static str, ScreenModes)>>,
    fail_enter: bool,
}

impl ScreenBackend for RecordingScreen {
    fn enter(&self, modes: ScreenModes) -> std::io::Result<()> {
        if self.fail_enter {
            return Err(std::io::Error::other("not a tty"));
        }
        self.calls.lock().unwrap().push(("enter", modes));
        Ok(())
    }

    fn leave(&self, modes: ScreenModes) -> std::io::Result<()> {
        self.calls.lock().unwrap().push(("leave", modes));
        Ok(())
    }
}

fn calls(screen: &RecordingScreen) -> Vec<&'static str> {
    screen.calls.lock().unwrap().iter().map(|(name, _)| *name).collect()
}

#[test]
fn dropping_the_guard_leaves_the_modes_it_entered() {
    let screen = Arc::new(RecordingScreen::default());
    let modes = ScreenModes {
        pointer: true,
        bracketed_paste: false,
        hide_cursor: true,
    };
    {
        let _guard = TerminalGuard::enter(screen.clone(), modes).unwrap();
    }

    assert_eq!(
        &*screen.calls.lock().unwrap(),
        &[("enter", modes), ("leave", modes)]
    );
}

#[test]
fn restore_runs_once_across_clones() {
    let screen = Arc::new(RecordingScreen::default());
    let guard = TerminalGuard::enter(screen.clone(), ScreenModes::DESKTOP).unwrap();
    let restorer = guard.restorer();
    let other = restorer.clone();
    assert!(!restorer.is_restored());

    restorer.restore().unwrap();
    other.restore().unwrap();
    assert!(other.is_restored());
    drop(guard);

    assert_eq!(calls(&screen), ["enter", "leave"]);
}

#[test]
fn failed_setup_has_nothing_to_restore() {
    let screen = Arc::new(RecordingScreen {
        fail_enter: true,
        ..RecordingScreen::default()
    });
    assert!(TerminalGuard::enter(screen.clone(), ScreenModes::DESKTOP).is_err());
    assert!(calls(&screen).is_empty());
}

#[test]
fn desktop_modes_enable_pointer_and_paste() {
    let modes = ScreenModes::DESKTOP;
    assert!(modes.pointer && modes.bracketed_paste && modes.hide_cursor);
}

#[test]
fn second_signal_forces_exit() {
    let mut escalation = SignalEscalation::default();
    assert_eq!(
        escalation.next(TerminationSignal::SigInt, true),
        SignalStep::Shutdown
    );
    assert_eq!(
        escalation.next(TerminationSignal::SigInt, true),
        SignalStep::Exit(130)
    );
}

#[test]
fn signal_without_event_loop_exits_immediately() {
    let mut escalation = SignalEscalation::default();
    assert_eq!(
        escalation.next(TerminationSignal::SigTerm, false),
        SignalStep::Exit(143)
    );
}
