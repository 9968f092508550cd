//! Incremental tail reader for the one-value-per-line data file.
//!
//! Each [`DataSource::poll`] consumes only the bytes appended since the last
//! call, so a tick costs O(new data) rather than O(file). A missing or
//! unreadable file yields zero samples for that tick and is retried on the
//! next one; the viewer keeps running while the producer is down.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of one ingest tick.
#[derive(Debug, Clone, Default)]
pub struct Ingest {
    /// Newly parsed samples, in file order.
    pub values: Vec<f64>,
    /// The file shrank below the consumed offset — the stream restarted and
    /// `values` holds a fresh read from the top. The caller must discard its
    /// accumulated samples.
    pub truncated: bool,
}

/// Tails a plain-text data file, one numeric value per line.
#[derive(Debug)]
pub struct DataSource {
    path: PathBuf,
    reader: Option<BufReader<File>>,
    /// Byte offset of consumed content. Only complete lines advance it; a
    /// partial trailing line is re-read once its newline arrives.
    position: u64,
}

impl DataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            reader: None,
            position: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read everything appended since the last poll.
    pub fn poll(&mut self) -> Ingest {
        let mut ingest = Ingest::default();

        let file_len = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                debug!("data file '{}' unavailable: {e}", self.path.display());
                self.reader = None;
                return ingest;
            }
        };

        if file_len < self.position {
            warn!(
                "data file '{}' shrank ({} -> {file_len} bytes); restarting from the top",
                self.path.display(),
                self.position
            );
            self.reader = None;
            self.position = 0;
            ingest.truncated = true;
        }

        if self.reader.is_none() {
            let file = match File::open(&self.path) {
                Ok(f) => f,
                Err(e) => {
                    debug!("cannot open '{}': {e}", self.path.display());
                    return ingest;
                }
            };
            let mut reader = BufReader::new(file);
            if let Err(e) = reader.seek(SeekFrom::Start(self.position)) {
                warn!("seek failed on '{}': {e}", self.path.display());
                return ingest;
            }
            self.reader = Some(reader);
        }

        if let Some(reader) = self.reader.as_mut() {
            let mut line = String::new();
            loop {
                line.clear();
                match reader.read_line(&mut line) {
                    Ok(0) => break,
                    Ok(n) => {
                        if !line.ends_with('\n') {
                            // Mid-write line: leave it for the next tick.
                            let _ = reader.seek(SeekFrom::Start(self.position));
                            break;
                        }
                        self.position += n as u64;
                        if let Some(value) = parse_line(&line) {
                            ingest.values.push(value);
                        }
                    }
                    Err(e) => {
                        warn!("read error on '{}': {e}", self.path.display());
                        break;
                    }
                }
            }
        }

        ingest
    }
}

/// Parse one line into a sample. Blank lines and `#` comments are skipped
/// silently; anything else that fails to parse is skipped with a warning.
fn parse_line(line: &str) -> Option<f64> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    match line.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("could not convert line: {line}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn data_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("data.txt");
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn append(path: &Path, contents: &str) {
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(path)
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn reads_all_values_on_first_poll() {
        let dir = tempfile::tempdir().unwrap();
        let path = data_file(&dir, "1.0\n2.5\n-3\n");
        let mut source = DataSource::new(&path);
        let ingest = source.poll();
        assert_eq!(ingest.values, vec![1.0, 2.5, -3.0]);
        assert!(!ingest.truncated);
    }

    #[test]
    fn skips_blanks_comments_and_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = data_file(&dir, "1.0\n\n# comment\nnot a number\n2.0\n");
        let mut source = DataSource::new(&path);
        assert_eq!(source.poll().values, vec![1.0, 2.0]);
    }

    #[test]
    fn second_poll_returns_only_new_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = data_file(&dir, "1.0\n2.0\n");
        let mut source = DataSource::new(&path);
        assert_eq!(source.poll().values, vec![1.0, 2.0]);
        assert!(source.poll().values.is_empty());

        append(&path, "3.0\n4.0\n");
        assert_eq!(source.poll().values, vec![3.0, 4.0]);
    }

    #[test]
    fn partial_trailing_line_waits_for_its_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = data_file(&dir, "1.0\n2.5");
        let mut source = DataSource::new(&path);
        assert_eq!(source.poll().values, vec![1.0]);

        // Completing the line must yield the whole value, not a fragment.
        append(&path, "5\n");
        assert_eq!(source.poll().values, vec![2.55]);
    }

    #[test]
    fn missing_file_yields_nothing_until_it_appears() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let mut source = DataSource::new(&path);
        assert!(source.poll().values.is_empty());

        std::fs::write(&path, "7.0\n").unwrap();
        assert_eq!(source.poll().values, vec![7.0]);
    }

    #[test]
    fn truncation_is_detected_and_restarts_from_the_top() {
        let dir = tempfile::tempdir().unwrap();
        let path = data_file(&dir, "1.0\n2.0\n3.0\n4.0\n5.0\n");
        let mut source = DataSource::new(&path);
        assert_eq!(source.poll().values.len(), 5);

        std::fs::write(&path, "9.0\n").unwrap();
        let ingest = source.poll();
        assert!(ingest.truncated);
        assert_eq!(ingest.values, vec![9.0]);
    }
}
