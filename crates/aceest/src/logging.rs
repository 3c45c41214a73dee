//! File logging for the terminal form.
//!
//! The form owns the terminal, so logs go to `{data_dir}/aceest.log`
//! instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "aceest.log";

/// Maximum log file size before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
const KEEP_SIZE: u64 = 1024 * 1024;

const ROTATION_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Trim the log to its newest `keep` bytes once it grows past `max`.
///
/// Returns whether the file was rotated.
fn rotate_log(log_path: &Path, max: u64, keep: u64) -> std::io::Result<bool> {
    let size = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };
    if size <= max {
        return Ok(false);
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(size.saturating_sub(keep)))?;
        file.read_to_end(&mut tail)?;
    }

    // Drop the partial first line
    let first_full_line = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    let mut file = File::create(log_path)?;
    file.write_all(ROTATION_MARKER)?;
    file.write_all(&tail[first_full_line..])?;

    Ok(true)
}

/// Hands tracing a writer onto one shared, append-mode log file
#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<File>>,
}

impl Write for SharedFileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.file.lock() {
            Ok(mut file) => file.write(buf),
            // Poisoned by a panicking writer; the file handle is still usable
            Err(poisoned) => poisoned.into_inner().write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.file.lock() {
            Ok(mut file) => file.flush(),
            Err(poisoned) => poisoned.into_inner().flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Create the data directory, rotate an oversized log, and open it for appending.
fn open_log_file(data_dir: &Path) -> std::io::Result<(PathBuf, File)> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    if let Err(e) = rotate_log(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    Ok((log_path, file))
}

/// Initialize logging to write to a file in the data directory.
///
/// The log level can be controlled via the `level` parameter or the `RUST_LOG` environment variable.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    let (log_path, file) = open_log_file(data_dir)?;

    let writer = SharedFileWriter {
        file: Arc::new(Mutex::new(file)),
    };

    let default_filter = format!("aceest={level},aceest_core={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(
        "ACEest logging initialized (log_path={})",
        log_path.display()
    );
    Ok(())
}
