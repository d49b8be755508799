// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Email shape check and invitation rejection reasons (UI-agnostic).

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// One character that is neither `@` nor ECMAScript whitespace.
///
/// Spelled out instead of `\s`: the Unicode `White_Space` set used by `regex`
/// includes U+0085 and omits U+FEFF, the reverse of browser input handling.
const ADDRESS_CHAR: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]";

/// Permissive shape: `local@domain.tld`, no whitespace and no extra `@` in any part.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    let c = ADDRESS_CHAR;
    Regex::new(&format!(r"^{c}+@{c}+\.{c}+$")).expect("email shape pattern is valid")
});

/// Why an address was not added to the invitation list.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InviteError {
    /// The candidate does not look like an email address.
    #[error("Invalid email address.")]
    InvalidFormat,
    /// The candidate is already in the list.
    #[error("This email address has already been added.")]
    DuplicateEntry,
}

/// Return `true` when `candidate` has the rough shape of an email address.
///
/// This is not an RFC 5322 validator: anything of the form
/// `x@y.z` without whitespace or additional `@` characters passes.
pub fn is_email_shaped(candidate: &str) -> bool {
    EMAIL_SHAPE.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for ok in [
            "a@b.com",
            "jane.doe@example.org",
            "x+tag@sub.domain.co.uk",
            "user@host.c",
            // NEL is not whitespace for browser-side validation.
            "a\u{85}b@c.com",
        ] {
            assert!(is_email_shaped(ok), "{ok} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "not-an-email",
            "a@b",
            "@b.com",
            "a@.com",
            "a@b.",
            "a b@c.com",
            "a@b@c.com",
            " a@b.com",
            "a@b.com ",
            "a\u{FEFF}b@c.com",
            "a@b\u{A0}c.com",
            "a@b.c\u{3000}m",
        ] {
            assert!(!is_email_shaped(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(InviteError::InvalidFormat.to_string(), "Invalid email address.");
        assert_eq!(
            InviteError::DuplicateEntry.to_string(),
            "This email address has already been added."
        );
    }
}
