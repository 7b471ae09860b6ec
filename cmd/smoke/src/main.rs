//! unixsupport End-to-End Smoke Test
//!
//! Exercises the support layer the way a binding layer would:
//!   Part A: Translation: native table round trips, escape codes
//!   Part B: Windows normalizer: mapped, sockets, raw codes (any host)
//!   Part C: Raiser: failed open(2), NUL path, unregistered identity
//!   Part D: Handles and close-on-exec on real descriptors (Unix)
//!
//! Run: ./target/release/unixsupport-smoke
//! Set UXS_LOG_LEVEL=debug to see lifecycle logging.

use unixsupport::win32::{self, codes};
use unixsupport::{
    decode, encode, error_message, ErrorKind, Raised, Support, SupportConfig, Win32Error,
    NATIVE_TABLE, WIN32_TABLE,
};

static UNIX_ERROR: &str = "unix_error";

// ── Test harness ──

struct TestRunner {
    total: usize,
    passed: usize,
    failed: usize,
}

const LINE: &str = "────────────────────────────────────────────────────────────";

impl TestRunner {
    fn new() -> Self {
        Self { total: 0, passed: 0, failed: 0 }
    }

    fn section(&self, name: &str) {
        println!("\n{}", LINE);
        println!("  {}", name);
        println!("{}", LINE);
    }

    fn pass(&mut self, name: &str) {
        self.total += 1;
        self.passed += 1;
        println!("  [{:2}] {:<52} PASS", self.total, name);
    }

    fn fail(&mut self, name: &str, reason: &str) {
        self.total += 1;
        self.failed += 1;
        println!("  [{:2}] {:<52} FAIL: {}", self.total, name, reason);
    }

    fn check(&mut self, name: &str, ok: bool, reason: &str) {
        if ok { self.pass(name); } else { self.fail(name, reason); }
    }

    fn summary(&self) {
        println!("\n{}", LINE);
        println!(
            "  Total: {}  Passed: {}  Failed: {}",
            self.total, self.passed, self.failed
        );
        println!("{}", LINE);
    }
}

// ════════════════════════════════════════════════════════════
// Part A: Translation
// ════════════════════════════════════════════════════════════

fn test_translation(t: &mut TestRunner) {
    t.section(&format!("Part A: Translation ({} table)", NATIVE_TABLE.name()));

    let broken: Vec<&str> = ErrorKind::KNOWN
        .iter()
        .filter(|&&k| NATIVE_TABLE.is_canonical(k) && encode(decode(k)) != k)
        .map(|k| k.name())
        .collect();
    t.check("round trip, canonical kinds", broken.is_empty(), &broken.join(","));

    let aliases = ErrorKind::KNOWN
        .iter()
        .filter(|&&k| !NATIVE_TABLE.is_canonical(k))
        .count();
    println!("       {} kind(s) alias an earlier kind on this platform", aliases);

    let code = 9_999;
    t.check(
        "unknown code preserved",
        encode(code) == ErrorKind::Unknown(code) && decode(encode(code)) == code,
        &format!("{:?}", encode(code)),
    );

    let msg = error_message(decode(ErrorKind::NoSuchFile));
    t.check("error_message(ENOENT)", !msg.is_empty(), "empty");
}

// ════════════════════════════════════════════════════════════
// Part B: Windows normalizer
// ════════════════════════════════════════════════════════════

fn test_normalizer(t: &mut TestRunner) {
    t.section("Part B: Windows normalizer");

    let n = win32::normalize(codes::ERROR_FILE_NOT_FOUND);
    t.check(
        "ERROR_FILE_NOT_FOUND -> ENOENT",
        WIN32_TABLE.encode(n) == ErrorKind::NoSuchFile,
        &format!("{}", n),
    );

    let n = win32::normalize(codes::WSAEWOULDBLOCK);
    t.check(
        "WSAEWOULDBLOCK segregated",
        n == -(codes::WSAEWOULDBLOCK as i32) && WIN32_TABLE.encode(n) == ErrorKind::WouldBlock,
        &format!("{}", n),
    );

    let raw = 1_460u32;
    let n = win32::normalize(raw);
    t.check(
        "unmapped code negated",
        n == -(raw as i32) && Win32Error::from_native(n).windows_code() == Some(raw),
        &format!("{}", n),
    );
}

// ════════════════════════════════════════════════════════════
// Part C: Raiser
// ════════════════════════════════════════════════════════════

fn test_raiser(t: &mut TestRunner, support: &Support<&'static str>) {
    t.section("Part C: Error raiser");

    #[cfg(unix)]
    {
        let path = "/nonexistent";
        let result = support.run(|r| {
            let c_path = std::ffi::CString::new(path).unwrap_or_default();
            let fd = unsafe { libc::open(c_path.as_ptr(), libc::O_RDONLY) };
            if fd < 0 {
                r.raise_from_errno("open", Some(path));
            }
            fd
        });
        match result {
            Err(Raised::Os { error, .. }) => {
                println!("       raised: {}", error);
                t.check(
                    "open(/nonexistent) -> ENOENT",
                    error.kind() == ErrorKind::NoSuchFile
                        && error.operation() == "open"
                        && error.argument() == path,
                    &error.to_string(),
                );
            }
            Err(other) => t.fail("open(/nonexistent) -> ENOENT", &other.to_string()),
            Ok(fd) => {
                unsafe { libc::close(fd) };
                t.fail("open(/nonexistent) -> ENOENT", "open succeeded");
            }
        }
    }

    let result = support.run(|r| r.check_path("/tmp/a\0b", "open"));
    t.check(
        "NUL in path -> ENOENT",
        matches!(&result, Err(Raised::Os { error, .. }) if error.kind() == ErrorKind::NoSuchFile),
        "not raised",
    );

    let config = support.config().clone().identity_name("smoke_unregistered");
    let lonely: Support<&'static str> = match Support::new(config) {
        Ok(s) => s,
        Err(e) => {
            t.fail("unregistered identity", &e.to_string());
            return;
        }
    };
    let result = lonely.run(|r| r.raise_os_error(decode(ErrorKind::Io), "read", None));
    t.check(
        "unregistered identity -> NotLinked",
        matches!(result, Err(Raised::NotLinked { .. })),
        "wrong signal",
    );
}

// ════════════════════════════════════════════════════════════
// Part D: Handles and close-on-exec
// ════════════════════════════════════════════════════════════

#[cfg(unix)]
fn test_handles(t: &mut TestRunner) {
    use std::collections::HashSet;
    use std::os::unix::io::IntoRawFd;
    use unixsupport::{is_inheritable, set_inheritable, wrap_handle};

    t.section("Part D: Handles and close-on-exec");

    let (r, w) = match nix::unistd::pipe() {
        Ok(p) => p,
        Err(e) => {
            t.fail("pipe", e.desc());
            return;
        }
    };
    let rfd = r.into_raw_fd();
    let wfd = w.into_raw_fd();

    let ok = set_inheritable(rfd, false).is_ok() && is_inheritable(rfd) == Ok(false);
    t.check("set_inheritable(false) sets FD_CLOEXEC", ok, "flag not set");
    let ok = set_inheritable(rfd, true).is_ok() && is_inheritable(rfd) == Ok(true);
    t.check("set_inheritable(true) clears FD_CLOEXEC", ok, "flag not cleared");

    let a = wrap_handle(rfd);
    let b = wrap_handle(wfd);
    let mut set = HashSet::new();
    set.insert(b);
    t.check("distinct fds are distinct handles", !set.contains(&a), "collided");

    t.check("first finalize closes", a.finalize().is_ok(), "close failed");
    t.check("second finalize is a no-op", a.finalize().is_ok(), "closed twice");
    t.check(
        "fd is gone after finalize",
        is_inheritable(rfd) == Err(libc::EBADF),
        "still open",
    );
}

fn main() {
    let support = match Support::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("unixsupport-smoke: {}", e);
            std::process::exit(2);
        }
    };
    if let Err(held) = support.register(&UNIX_ERROR) {
        eprintln!("unixsupport-smoke: identity already registered as {}", held);
        std::process::exit(2);
    }

    let mut t = TestRunner::new();
    test_translation(&mut t);
    test_normalizer(&mut t);
    test_raiser(&mut t, &support);
    #[cfg(unix)]
    test_handles(&mut t);
    t.summary();

    if t.failed > 0 {
        std::process::exit(1);
    }
}
