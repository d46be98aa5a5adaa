//! Navigation seam between the launch engine and the host.
//!
//! The engine never touches the OS directly; it hands navigation targets to a
//! `Navigator`. The production implementation forwards them to the platform
//! URI opener, best-effort. Tests substitute a recording implementation.

use std::process::Command;

use crate::error::NavigateError;

/// Handle to an embedded sub-document created by `embed_frame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// Injectable navigation interface used by the launch engine.
pub trait Navigator: Send {
    /// Point the current context at `uri`.
    fn navigate(&mut self, uri: &str) -> Result<(), NavigateError>;

    /// Deliver `uri` through a hidden, short-lived embedded sub-document.
    ///
    /// The returned handle is passed back to `remove_frame` after a grace
    /// period. Hosts without an embedding surface may deliver the intent any
    /// other way, as long as the handle round-trips.
    fn embed_frame(&mut self, uri: &str) -> Result<FrameId, NavigateError>;

    /// Tear down a previously embedded sub-document.
    fn remove_frame(&mut self, frame: FrameId);
}

/// Production navigator: routes URIs through the host OS opener.
pub struct SystemNavigator {
    next_frame: u64,
}

impl SystemNavigator {
    pub fn new() -> Self {
        Self { next_frame: 0 }
    }
}

impl Default for SystemNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for SystemNavigator {
    fn navigate(&mut self, uri: &str) -> Result<(), NavigateError> {
        open_with_host(uri)
    }

    fn embed_frame(&mut self, uri: &str) -> Result<FrameId, NavigateError> {
        // No embedding surface on a plain host; the frame's navigation
        // intent goes through the same opener.
        open_with_host(uri)?;
        self.next_frame += 1;
        Ok(FrameId(self.next_frame))
    }

    fn remove_frame(&mut self, _frame: FrameId) {}
}

/// Hand a URI to the platform opener.
fn open_with_host(uri: &str) -> Result<(), NavigateError> {
    #[cfg(target_os = "macos")]
    let status = Command::new("open").arg(uri).status();
    #[cfg(target_os = "windows")]
    let status = Command::new("cmd").args(["/C", "start", "", uri]).status();
    #[cfg(all(unix, not(target_os = "macos")))]
    let status = Command::new("xdg-open").arg(uri).status();

    let status = status?;
    if status.success() {
        Ok(())
    } else {
        Err(NavigateError::Spawn(std::io::Error::other(format!(
            "opener exited with {status}"
        ))))
    }
}

/// Navigator that prints what would happen instead of doing it.
pub struct DryRunNavigator {
    next_frame: u64,
}

impl DryRunNavigator {
    pub fn new() -> Self {
        Self { next_frame: 0 }
    }
}

impl Default for DryRunNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for DryRunNavigator {
    fn navigate(&mut self, uri: &str) -> Result<(), NavigateError> {
        println!("navigate {uri}");
        Ok(())
    }

    fn embed_frame(&mut self, uri: &str) -> Result<FrameId, NavigateError> {
        self.next_frame += 1;
        println!("embed-frame #{} {uri}", self.next_frame);
        Ok(FrameId(self.next_frame))
    }

    fn remove_frame(&mut self, frame: FrameId) {
        println!("remove-frame #{}", frame.0);
    }
}
