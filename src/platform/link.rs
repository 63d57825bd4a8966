//! Opening venue links in the host's default handler.

use std::io;
use std::process::{Command, Stdio};

#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("refusing to open non-http link {0:?}")]
    UnsupportedScheme(String),
    #[error("no URL handler available ({tried})")]
    NoHandler {
        tried: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Something that can hand a URL to the outside world.
pub trait LinkOpener {
    /// Fire-and-forget: returns once the handler has been launched.
    fn open_url(&mut self, url: &str) -> Result<(), LinkError>;
}

/// Launches the platform's opener (`xdg-open`, `open`, `start`) detached
/// with null stdio so it cannot scribble over the TUI.
#[derive(Debug, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open_url(&mut self, url: &str) -> Result<(), LinkError> {
        check_scheme(url)?;

        #[cfg(target_os = "macos")]
        let (cmd, args): (&'static str, Vec<&str>) = ("open", vec![url]);

        #[cfg(target_os = "windows")]
        let (cmd, args): (&'static str, Vec<&str>) = ("cmd", vec!["/C", "start", "", url]);

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let (cmd, args): (&'static str, Vec<&str>) = ("xdg-open", vec![url]);

        Command::new(cmd)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|mut child| {
                // Reap the opener once it hands off to the browser.
                std::thread::spawn(move || child.wait());
            })
            .map_err(|source| LinkError::NoHandler { tried: cmd, source })
    }
}

/// Only absolute http(s) links are handed to the system.
fn check_scheme(url: &str) -> Result<(), LinkError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(LinkError::UnsupportedScheme(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_schemes() {
        let mut opener = SystemLinkOpener;
        let err = opener.open_url("file:///etc/passwd").unwrap_err();
        assert!(matches!(err, LinkError::UnsupportedScheme(_)));
    }

    #[test]
    fn accepts_http_and_https() {
        assert!(check_scheme("https://lostcatnq.co.uk/").is_ok());
        assert!(check_scheme("http://example.com").is_ok());
    }
}
