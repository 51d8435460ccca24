//! Stderr diagnostics shared by the loader, dispatch and CLI.

use std::fmt::Display;

/// Format a hard error message. Used as the payload of `bail!`/`with_context`.
pub fn error_message(msg: impl Display) -> String {
    format!("ERROR: {}", msg)
}

/// Report a soft problem on stderr and keep going.
pub fn warn(msg: impl Display) {
    eprintln!("WARN: {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_message_is_prefixed() {
        assert_eq!(error_message("bad tag"), "ERROR: bad tag");
        assert_eq!(error_message(format!("id {}", 3)), "ERROR: id 3");
    }
}
