//! Regenerate documentation whenever the configuration tree changes.

use std::path::Path;

use anyhow::{Context, Result};

use crate::commands::generate::generate;
use crate::config::{load_config, resolve, GenerateArgs};
use crate::watcher::{FileWatcher, WatchEvent};

/// Run the watch command until interrupted.
pub async fn run(config_path: &Path, args: GenerateArgs) -> Result<()> {
    let settings = resolve(args, load_config(config_path)?)?;

    // A failed run is reported and the next change retries it.
    if let Err(e) = generate(&settings) {
        tracing::error!("{:#}", e);
    }

    let (_watcher, mut events) = FileWatcher::new(&settings.faces_config)
        .with_context(|| format!("Failed to watch {}", settings.faces_config.display()))?;

    tracing::info!(
        "Watching {} for changes (Ctrl+C to stop)",
        settings.faces_config.display()
    );

    loop {
        tokio::select! {
            event = events.recv() => {
                match event {
                    Some(WatchEvent::Deleted(path)) => {
                        tracing::warn!("{} was deleted, waiting for it to come back", path.display());
                    }
                    Some(WatchEvent::Modified(path) | WatchEvent::Created(path)) => {
                        tracing::info!("{} changed, regenerating", path.display());
                        if let Err(e) = generate(&settings) {
                            tracing::error!("{:#}", e);
                        }
                    }
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Stopping watch");
                break;
            }
        }
    }

    Ok(())
}
