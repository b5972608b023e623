//! Process-wide teardown registry for panics and termination signals.
//!
//! The session guard restores the terminal on every ordinary return path.
//! Two paths bypass it: a panic in a `panic = "abort"` build, and a
//! SIGINT/SIGTERM/SIGHUP sent from outside (raw mode turns the keyboard
//! Ctrl-C into a plain byte, so these only come from other processes). Both
//! go through the single hook stored here. The hook is taken out of the
//! registry before it runs, so restoration happens at most once no matter
//! which path gets there first.

use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Restoration action registered by a terminal device.
pub type TeardownHook = Box<dyn FnOnce() + Send>;

/// Exit status used when a termination signal ends the session
const SIGNAL_EXIT_STATUS: i32 = 1;

static TEARDOWN: Mutex<Option<TeardownHook>> = Mutex::new(None);

/// Register `hook` and make sure the panic hook and signal handler are installed.
pub fn arm(hook: TeardownHook) {
    install_handlers();
    store(hook);
}

/// Withdraw the registered hook without running it.
///
/// Returns true if a hook was registered.
pub fn disarm() -> bool {
    registry().take().is_some()
}

/// Run and remove the registered hook.
///
/// Returns false when there was nothing left to run.
pub fn run() -> bool {
    // Take the hook first so the lock is released before it runs
    let hook = registry().take();
    match hook {
        Some(hook) => {
            hook();
            true
        }
        None => false,
    }
}

fn store(hook: TeardownHook) {
    *registry() = Some(hook);
}

fn registry() -> MutexGuard<'static, Option<TeardownHook>> {
    TEARDOWN.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Install the panic hook and the termination signal handler, once per process.
fn install_handlers() {
    static INSTALLED: AtomicBool = AtomicBool::new(false);

    if INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before showing panic message
        run();
        original_hook(panic_info);
    }));

    if let Err(err) = ctrlc::set_handler(|| {
        if run() {
            log::warn!("Termination signal received, terminal restored");
        }
        std::process::exit(SIGNAL_EXIT_STATUS);
    }) {
        log::warn!("Could not install termination signal handler: {}", err);
    }
}
