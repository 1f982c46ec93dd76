//! Admin bearer token.

use std::{fmt, iter};

use zeroize::Zeroize;

/// Static bearer token guarding admin endpoints.
#[derive(Clone)]
pub(crate) struct AdminToken(String);

impl AdminToken {
    #[must_use]
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Compare in time that depends only on the configured token's length.
    ///
    /// The candidate is zero-padded to that length; a length mismatch is
    /// folded into the difference.
    #[must_use]
    pub(crate) fn matches(&self, candidate: &str) -> bool {
        let expected = self.0.as_bytes();
        let candidate = candidate.as_bytes();

        if expected.is_empty() {
            return false;
        }

        let padded = candidate.iter().copied().chain(iter::repeat(0));

        expected
            .iter()
            .zip(padded)
            .fold(expected.len() ^ candidate.len(), |diff, (a, b)| {
                diff | usize::from(a ^ b)
            })
            == 0
    }
}

impl fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminToken(**redacted**)")
    }
}

impl Drop for AdminToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
