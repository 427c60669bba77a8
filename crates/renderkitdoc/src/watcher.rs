//! Watching the configuration tree for changes.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// Watched file was written
    Modified(PathBuf),

    /// Watched file was (re)created, e.g. by an editor's atomic save
    Created(PathBuf),

    /// Watched file was deleted
    Deleted(PathBuf),
}

/// Watches a single file through its parent directory.
///
/// Watching the directory rather than the file keeps the watch alive when
/// editors replace the file on save.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a watcher for `file`.
    ///
    /// Returns the watcher and a channel to receive events for that file only.
    pub fn new(file: &Path) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let dir = match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = file.file_name().map(|name| name.to_os_string());

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(std::io::Error::other)?;

        std::thread::spawn(move || {
            let mut last_event_time: Option<Instant> = None;
            let debounce_duration = Duration::from_millis(100);

            while let Ok(event) = sync_rx.recv() {
                for path in event.paths {
                    if path.file_name().map(|name| name.to_os_string()) != file_name {
                        continue;
                    }

                    // Debounce the burst of events a single save produces
                    let now = Instant::now();
                    if last_event_time.is_some_and(|last| now.duration_since(last) < debounce_duration) {
                        continue;
                    }

                    if let Some(watch_event) = classify_event(&path, &event.kind) {
                        last_event_time = Some(now);
                        if async_tx.blocking_send(watch_event).is_err() {
                            return;
                        }
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &EventKind) -> Option<WatchEvent> {
    match kind {
        EventKind::Create(_) => Some(WatchEvent::Created(path.to_path_buf())),
        EventKind::Remove(_) => Some(WatchEvent::Deleted(path.to_path_buf())),
        EventKind::Modify(_) => Some(WatchEvent::Modified(path.to_path_buf())),
        _ => None,
    }
}
