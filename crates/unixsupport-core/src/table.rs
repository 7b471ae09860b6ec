//! Error code tables and the native <-> portable translator.
//!
//! An [`ErrorTable`] holds one native code per non-escape [`ErrorKind`],
//! indexed by declaration order. The array length is fixed by the type,
//! so a table that drifts from the enumeration does not compile.
//!
//! # Aliases
//!
//! Some platforms give two kinds the same native value (Linux and macOS
//! define `EWOULDBLOCK == EAGAIN`). `encode` is a first-match linear scan,
//! so such a value always encodes to the kind declared first. Use
//! [`ErrorTable::is_canonical`] to tell whether a kind survives a
//! `decode` / `encode` round trip on a given table.

use crate::kind::{ErrorKind, NativeErrorCode};

/// Ordered table of native error codes, one per non-escape kind.
#[derive(Debug)]
pub struct ErrorTable {
    name: &'static str,
    codes: [NativeErrorCode; ErrorKind::COUNT],
}

impl ErrorTable {
    /// Build a table. `codes[i]` is the native value of `ErrorKind::KNOWN[i]`.
    pub const fn new(name: &'static str, codes: [NativeErrorCode; ErrorKind::COUNT]) -> Self {
        Self { name, codes }
    }

    /// Table label, for diagnostics.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw native codes in kind order.
    #[inline]
    pub fn codes(&self) -> &[NativeErrorCode] {
        &self.codes
    }

    /// Native code to portable kind.
    ///
    /// Codes missing from the table come back as `ErrorKind::Unknown(code)`
    /// with `code` untouched; nothing is coerced to a near neighbour.
    pub fn encode(&self, code: NativeErrorCode) -> ErrorKind {
        match self.codes.iter().position(|&c| c == code) {
            Some(idx) => ErrorKind::KNOWN[idx],
            None => ErrorKind::Unknown(code),
        }
    }

    /// Portable kind to native code.
    #[inline]
    pub fn decode(&self, kind: ErrorKind) -> NativeErrorCode {
        match kind {
            ErrorKind::Unknown(code) => code,
            known => match known.index() {
                Some(idx) => self.codes[idx],
                None => unreachable!("only Unknown lacks an index"),
            },
        }
    }

    /// True if `encode(decode(kind)) == kind` on this table.
    pub fn is_canonical(&self, kind: ErrorKind) -> bool {
        self.encode(self.decode(kind)) == kind
    }
}
