//! Logging sink handed to jobs at construction
//!
//! Jobs never reach for a global logger; they log through the [`LogSink`] they were
//! built with. The binary wires in [`TracingSink`], which forwards to whatever
//! `tracing` subscriber the process installed.

/// Tag attached to every line the journey mapper emits, used as the `tracing` target
pub const JOURNEY_MAPPER_TAG: &str = "journeymapper";

pub trait LogSink {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Forwards log lines to `tracing` under the [`JOURNEY_MAPPER_TAG`] target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: JOURNEY_MAPPER_TAG, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: JOURNEY_MAPPER_TAG, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(log: impl FnOnce(&TracingSink)) -> Vec<String> {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || log(&TracingSink));
        buffer.contents().lines().map(|l| l.trim().to_string()).collect()
    }

    #[test]
    fn test_info_lines_are_tagged() {
        let lines = capture(|sink| sink.info("Found content/journey/a.md"));
        assert_eq!(lines, vec!["INFO journeymapper: Found content/journey/a.md"]);
    }

    #[test]
    fn test_warn_lines_are_tagged() {
        let lines = capture(|sink| sink.warn("Duplicate slug 'loop'"));
        assert_eq!(lines, vec!["WARN journeymapper: Duplicate slug 'loop'"]);
    }

    #[test]
    fn test_lines_keep_order() {
        let lines = capture(|sink| {
            sink.info("Found a.md");
            sink.info("data/journeys.json updated");
        });
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("journeymapper: Found a.md"));
        assert!(lines[1].ends_with("journeymapper: data/journeys.json updated"));
    }
}
