use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

/// Stderr reporter with an elapsed-time prefix. Data goes to files and
/// stdout stays clean, so all chatter lands on stderr.
pub struct ConsoleReporter {
    quiet: bool,
    t0: Instant,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            t0: Instant::now(),
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.line("", msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.line("WARN ", msg.as_ref());
    }

    pub fn wrote(&self, path: &Path, count: usize) {
        self.line("", &format!("[OK] {} ({count} records)", path.display()));
    }

    fn line(&self, level: &str, msg: &str) {
        if self.quiet {
            return;
        }
        let ts = fmt_elapsed(self.t0.elapsed().as_secs_f64());
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "[{ts}] {level}{msg}");
    }
}

fn fmt_elapsed(seconds: f64) -> String {
    let seconds = seconds.max(0.0) as u64;
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{h:02}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}
