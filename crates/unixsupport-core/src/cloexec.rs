//! Close-on-exec / inheritance default.
//!
//! One write-once, read-mostly cell. It is set during startup (see
//! [`SupportConfig::apply`](crate::config::SupportConfig::apply)) before
//! concurrent use begins, so `Relaxed` is enough: there is no other data
//! whose visibility hangs off it.

use std::sync::atomic::{AtomicBool, Ordering};

/// Default close-on-exec policy, resolving optional per-call overrides.
#[derive(Debug)]
pub struct CloexecPolicy {
    default: AtomicBool,
}

impl CloexecPolicy {
    pub const fn new(default: bool) -> Self {
        Self { default: AtomicBool::new(default) }
    }

    #[inline]
    pub fn default_cloexec(&self) -> bool {
        self.default.load(Ordering::Relaxed)
    }

    pub fn set_default(&self, cloexec: bool) {
        self.default.store(cloexec, Ordering::Relaxed);
    }

    /// `explicit` if given, else the default.
    #[inline]
    pub fn resolve(&self, explicit: Option<bool>) -> bool {
        explicit.unwrap_or_else(|| self.default_cloexec())
    }
}

impl Default for CloexecPolicy {
    fn default() -> Self {
        Self::new(false)
    }
}

static PROCESS_POLICY: CloexecPolicy = CloexecPolicy::new(false);

/// The process-wide policy.
#[inline]
pub fn process_policy() -> &'static CloexecPolicy {
    &PROCESS_POLICY
}

/// Process-wide default: `true` means new handles are close-on-exec
/// (not inherited) unless the caller says otherwise.
#[inline]
pub fn default_cloexec() -> bool {
    PROCESS_POLICY.default_cloexec()
}

/// Set the process-wide default. Call once, at startup.
pub fn set_cloexec_default(cloexec: bool) {
    PROCESS_POLICY.set_default(cloexec);
    crate::udebug!("cloexec default set to {}", cloexec);
}

/// Resolve an optional per-call override against the process default.
#[inline]
pub fn resolve_cloexec(explicit: Option<bool>) -> bool {
    PROCESS_POLICY.resolve(explicit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_wins() {
        let policy = CloexecPolicy::new(false);
        assert!(policy.resolve(Some(true)));
        assert!(!policy.resolve(Some(false)));

        policy.set_default(true);
        assert!(policy.resolve(Some(true)));
        assert!(!policy.resolve(Some(false)));
    }

    #[test]
    fn test_none_follows_default() {
        let policy = CloexecPolicy::default();
        assert_eq!(policy.resolve(None), policy.default_cloexec());
        policy.set_default(true);
        assert!(policy.resolve(None));
        policy.set_default(false);
        assert!(!policy.resolve(None));
    }

    #[test]
    fn test_process_policy() {
        // Only reads: other tests may not assume a particular default.
        assert_eq!(resolve_cloexec(None), default_cloexec());
        assert!(resolve_cloexec(Some(true)));
        assert!(!resolve_cloexec(Some(false)));
    }
}
