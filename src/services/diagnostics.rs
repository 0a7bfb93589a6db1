use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;

/// Append-only sink for per-request diagnostics.
///
/// The recommendation pipeline records the outgoing prompt, the raw model
/// response, and any parse or invocation error at fixed checkpoints. The
/// sink is a separate collaborator so the pipeline itself stays testable
/// without filesystem access.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, entry: &str);
}

/// File-backed sink; opens and appends per call, no handle is kept.
pub struct FileDiagnostics {
    path: PathBuf,
}

impl FileDiagnostics {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DiagnosticSink for FileDiagnostics {
    fn record(&self, entry: &str) {
        let line = format!("[{}] {}\n\n", Utc::now().to_rfc3339(), entry);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));

        // A failed diagnostic write must not disturb the pipeline.
        if let Err(e) = result {
            tracing::warn!(error = %e, path = %self.path.display(), "Diagnostic write failed");
        }
    }
}

/// Sink that discards every entry
pub struct NullDiagnostics;

impl DiagnosticSink for NullDiagnostics {
    fn record(&self, _entry: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_appends_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagnostics.log");
        let sink = FileDiagnostics::new(&path);

        sink.record("Prompt sent to model: first");
        sink.record("Response from model: second");

        let contents = std::fs::read_to_string(&path).unwrap();
        let first = contents.find("first").unwrap();
        let second = contents.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_file_sink_tolerates_unwritable_path() {
        let sink = FileDiagnostics::new("/nonexistent-dir/diagnostics.log");
        // Must not panic.
        sink.record("entry");
    }
}
