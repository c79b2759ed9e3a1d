//! Clipboard operations for mint.
//!
//! Uses the system clipboard through arboard when it is reachable.
//! Copied text is also kept in-process, so cut/copy/paste keep working
//! on a terminal without a display server.

use arboard::Clipboard;
use std::sync::{Mutex, OnceLock};

#[cfg(target_os = "linux")]
use arboard::{GetExtLinux, LinuxClipboardKind, SetExtLinux};

struct ClipboardState {
    /// None when no system clipboard is available
    system: Option<Clipboard>,
    /// Last text copied from this process
    local: String,
}

static CLIPBOARD: OnceLock<Mutex<ClipboardState>> = OnceLock::new();

fn get_clipboard() -> &'static Mutex<ClipboardState> {
    CLIPBOARD.get_or_init(|| {
        Mutex::new(ClipboardState {
            system: Clipboard::new().ok(),
            local: String::new(),
        })
    })
}

/// Copy text to the clipboard.
///
/// On Linux, copies to both CLIPBOARD and PRIMARY selections.
/// Errors only for empty text or a poisoned lock; a failing system
/// clipboard leaves the text in the in-process store.
pub fn copy(text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("Cannot copy empty text".to_string());
    }

    let mut state = get_clipboard()
        .lock()
        .map_err(|e| format!("Failed to lock clipboard: {}", e))?;
    state.local = text.to_string();

    if let Some(clipboard) = state.system.as_mut() {
        #[cfg(target_os = "linux")]
        {
            let _ = clipboard
                .set()
                .clipboard(LinuxClipboardKind::Clipboard)
                .text(text.to_string());
            let _ = clipboard
                .set()
                .clipboard(LinuxClipboardKind::Primary)
                .text(text.to_string());
        }

        #[cfg(not(target_os = "linux"))]
        {
            let _ = clipboard.set_text(text);
        }
    }

    Ok(())
}

/// Paste text from the clipboard.
///
/// Prefers the system clipboard, then the in-process store.
/// Returns None if both are empty.
pub fn paste() -> Option<String> {
    let mut state = get_clipboard().lock().ok()?;

    if let Some(text) = state.system.as_mut().and_then(system_text) {
        if !text.is_empty() {
            return Some(text);
        }
    }

    if state.local.is_empty() {
        None
    } else {
        Some(state.local.clone())
    }
}

/// Cut text to clipboard.
///
/// Same as copy - actual deletion is handled by the caller.
pub fn cut(text: &str) -> Result<(), String> {
    copy(text)
}

#[cfg(target_os = "linux")]
fn system_text(clipboard: &mut Clipboard) -> Option<String> {
    clipboard
        .get()
        .clipboard(LinuxClipboardKind::Clipboard)
        .text()
        .ok()
}

#[cfg(not(target_os = "linux"))]
fn system_text(clipboard: &mut Clipboard) -> Option<String> {
    clipboard.get_text().ok()
}
