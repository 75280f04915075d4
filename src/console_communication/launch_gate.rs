use crate::warn;
use std::io::{BufRead, ErrorKind};
use tokio::sync::oneshot;

/// What the console reader saw before it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateInput {
    /// A complete, newline-terminated line.
    Launch,
    /// End of input or a read error; no launch command can follow.
    Closed,
}

/// Manual launch gate: opens on the first newline-terminated line read from the console.
///
/// The console is read on a dedicated OS thread, so a pending read never holds up runtime
/// shutdown. Closed or failing input keeps the gate shut for good; only cancellation ends
/// the wait then.
pub struct LaunchGate {
    opened: oneshot::Receiver<()>,
}

impl LaunchGate {
    pub fn stdin() -> Self { Self::new(std::io::BufReader::new(std::io::stdin())) }

    pub fn new<R>(input: R) -> Self
    where R: BufRead + Send + 'static {
        let (tx, opened) = oneshot::channel();
        let spawned = std::thread::Builder::new().name("launch-gate".to_string()).spawn(move || {
            if read_launch_line(input) == GateInput::Launch {
                // The mission may already be shutting down and have dropped the receiver.
                let _ = tx.send(());
            }
        });
        if let Err(e) = spawned {
            warn!("Could not start console reader ({e}), launch gate stays shut!");
        }
        Self { opened }
    }

    /// Resolves once the operator entered a line. Never resolves if the console closed.
    pub async fn wait(self) {
        if self.opened.await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

fn read_launch_line<R: BufRead>(mut input: R) -> GateInput {
    let mut line = String::new();
    loop {
        match input.read_line(&mut line) {
            Ok(0) => {
                warn!("Console input closed, launch gate stays shut until shutdown!");
                return GateInput::Closed;
            }
            Ok(_) if line.ends_with('\n') => return GateInput::Launch,
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => {
                warn!("Console input failed ({e}), launch gate stays shut until shutdown!");
                return GateInput::Closed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Read};
    use std::time::Duration;

    struct FailingInput;

    impl Read for FailingInput {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("console detached"))
        }
    }

    /// Blocks in `read` until its sender goes away.
    struct BlockingInput(std::sync::mpsc::Receiver<u8>);

    impl Read for BlockingInput {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let byte = self.0.recv().map_err(std::io::Error::other)?;
            buf[0] = byte;
            Ok(1)
        }
    }

    #[test]
    fn pending_console_read_does_not_hold_runtime_shutdown() {
        let (_tx, rx) = std::sync::mpsc::channel::<u8>();
        let rt = tokio::runtime::Builder::new_multi_thread().enable_time().build().unwrap();
        let res = rt.block_on(async move {
            let gate = LaunchGate::new(BufReader::new(BlockingInput(rx)));
            tokio::time::timeout(Duration::from_millis(100), gate.wait()).await
        });
        assert!(res.is_err());
        let start = std::time::Instant::now();
        drop(rt);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn only_terminated_lines_launch() {
        assert_eq!(read_launch_line(&b"\n"[..]), GateInput::Launch);
        assert_eq!(read_launch_line(&b"go\nrest"[..]), GateInput::Launch);
        assert_eq!(read_launch_line(&b""[..]), GateInput::Closed);
        assert_eq!(read_launch_line(&b"x"[..]), GateInput::Closed);
        assert_eq!(read_launch_line(BufReader::new(FailingInput)), GateInput::Closed);
    }

    #[tokio::test]
    async fn opens_on_newline() {
        let res = tokio::time::timeout(Duration::from_secs(5), LaunchGate::new(&b"\n"[..]).wait()).await;
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn closed_input_keeps_gate_shut() {
        let res = tokio::time::timeout(Duration::from_millis(300), LaunchGate::new(&b""[..]).wait()).await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn partial_line_keeps_gate_shut() {
        let res = tokio::time::timeout(Duration::from_millis(300), LaunchGate::new(&b"x"[..]).wait()).await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn failing_input_keeps_gate_shut() {
        let gate = LaunchGate::new(BufReader::new(FailingInput));
        let res = tokio::time::timeout(Duration::from_millis(300), gate.wait()).await;
        assert!(res.is_err());
    }
}
