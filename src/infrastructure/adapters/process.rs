//! Child process execution with captured output and optional timeout

use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// How long to keep reading the pipes once the child is gone. Background
/// processes started by a test inherit the pipes and may hold them open
/// indefinitely; whatever arrived by then is kept.
const DRAIN_GRACE: Duration = Duration::from_millis(500);

/// Captured result of a finished (or killed) child process.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    /// `None` when the process was killed after a timeout
    pub status: Option<ExitStatus>,
    pub stdout: String,
    pub stderr: String,
    pub timed_out: bool,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.status.map(|s| s.success()).unwrap_or(false)
    }

    /// stdout followed by stderr, for logs.
    pub fn combined(&self) -> String {
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (true, _) => self.stderr.clone(),
            (false, true) => self.stdout.clone(),
            (false, false) => format!("{}\n{}", self.stdout.trim_end(), self.stderr),
        }
    }
}

/// Run `command` to completion, capturing stdout and stderr.
///
/// With a timeout the child is killed once it elapses and `timed_out` is set.
/// Without one this blocks until the child exits. Either way, reading the
/// pipes stops [`DRAIN_GRACE`] after the child is gone.
pub fn run_captured(command: &mut Command, timeout: Option<Duration>) -> io::Result<CapturedOutput> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = PipeReader::spawn(child.stdout.take());
    let stderr = PipeReader::spawn(child.stderr.take());

    let (status, timed_out) = match timeout {
        None => (Some(child.wait()?), false),
        Some(limit) => wait_with_deadline(&mut child, limit)?,
    };

    let drain_until = Instant::now() + DRAIN_GRACE;
    Ok(CapturedOutput {
        status,
        stdout: stdout.finish(drain_until),
        stderr: stderr.finish(drain_until),
        timed_out,
    })
}

fn wait_with_deadline(child: &mut Child, limit: Duration) -> io::Result<(Option<ExitStatus>, bool)> {
    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((Some(status), false));
        }
        if Instant::now() >= deadline {
            warn!(pid = child.id(), timeout_secs = limit.as_secs_f64(), "killing hung test process");
            // Already exited between try_wait and kill is fine
            let _ = child.kill();
            let _ = child.wait();
            return Ok((None, true));
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Background reader that accumulates a pipe's bytes as they arrive, so a
/// partial capture survives a pipe that never reaches EOF.
struct PipeReader {
    buf: Arc<Mutex<Vec<u8>>>,
    eof: Receiver<()>,
}

impl PipeReader {
    fn spawn<R: Read + Send + 'static>(pipe: Option<R>) -> Self {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let (tx, eof) = mpsc::channel();
        let sink = Arc::clone(&buf);
        thread::spawn(move || {
            if let Some(mut pipe) = pipe {
                let mut chunk = [0u8; 8192];
                loop {
                    match pipe.read(&mut chunk) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => match sink.lock() {
                            Ok(mut bytes) => bytes.extend_from_slice(&chunk[..n]),
                            Err(_) => break,
                        },
                    }
                }
            }
            let _ = tx.send(());
        });
        Self { buf, eof }
    }

    /// Wait for EOF until `until`, then take whatever was read.
    fn finish(self, until: Instant) -> String {
        let wait = until.saturating_duration_since(Instant::now());
        if self.eof.recv_timeout(wait).is_err() {
            debug!("pipe still open after child exit, keeping partial output");
        }
        let text = match self.buf.lock() {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => String::new(),
        };
        text
    }
}
