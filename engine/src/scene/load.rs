//! Map Loading Module
//!
//! Reads and decodes map files without blocking the frame loop. `MapLoader`
//! moves the read + JSON decode onto a background thread and hands the result
//! back over a channel; the frame driver polls once per frame. Load failure
//! is a reported state, never a panic - the session keeps running with an
//! empty obstacle set.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::scene::MapScene;

/// Errors that can occur while loading a map file.
#[derive(Debug)]
pub enum MapLoadError {
    /// Reading the file failed.
    Io(std::io::Error),
    /// The file was read but is not a valid map description.
    Json(serde_json::Error),
    /// The loader thread disappeared without delivering a result.
    WorkerGone,
}

impl fmt::Display for MapLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapLoadError::Io(e) => write!(f, "map file read error: {}", e),
            MapLoadError::Json(e) => write!(f, "map file decode error: {}", e),
            MapLoadError::WorkerGone => write!(f, "map loader thread exited without a result"),
        }
    }
}

impl std::error::Error for MapLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapLoadError::Io(e) => Some(e),
            MapLoadError::Json(e) => Some(e),
            MapLoadError::WorkerGone => None,
        }
    }
}

impl From<std::io::Error> for MapLoadError {
    fn from(e: std::io::Error) -> Self {
        MapLoadError::Io(e)
    }
}

impl From<serde_json::Error> for MapLoadError {
    fn from(e: serde_json::Error) -> Self {
        MapLoadError::Json(e)
    }
}

/// Read and decode a map file synchronously.
pub fn load_map_file(path: &Path) -> Result<MapScene, MapLoadError> {
    let contents = std::fs::read_to_string(path)?;
    let scene: MapScene = serde_json::from_str(&contents)?;
    Ok(scene)
}

/// Background map loader.
///
/// `spawn` starts a worker thread that reads and decodes the file; `poll`
/// checks for the result without blocking. Exactly one result is delivered
/// per loader; after that, `poll` keeps returning `None`.
pub struct MapLoader {
    receiver: Receiver<Result<MapScene, MapLoadError>>,
    delivered: bool,
}

impl MapLoader {
    /// Start loading a map file on a background thread.
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            log::info!("[MapLoader] loading {}", path.display());
            let result = load_map_file(&path);
            // Receiver may be gone if the session shut down mid-load
            let _ = sender.send(result);
        });

        Self {
            receiver,
            delivered: false,
        }
    }

    /// Check for the load result without blocking.
    ///
    /// Returns `None` while the worker is still running (and forever after
    /// the result has been delivered once).
    pub fn poll(&mut self) -> Option<Result<MapScene, MapLoadError>> {
        if self.delivered {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.delivered = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.delivered = true;
                Some(Err(MapLoadError::WorkerGone))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn temp_map_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("liminal_{}_{}.json", name, std::process::id()))
    }

    fn poll_until_done(loader: &mut MapLoader) -> Result<MapScene, MapLoadError> {
        for _ in 0..500 {
            if let Some(result) = loader.poll() {
                return result;
            }
            thread::sleep(Duration::from_millis(2));
        }
        panic!("loader did not finish in time");
    }

    #[test]
    fn test_load_valid_map() {
        let path = temp_map_path("valid");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"name":"t","nodes":[{{"primitives":[{{"bounds":{{"min":[0.0,0.0,0.0],"max":[1.0,1.0,1.0]}}}}]}}]}}"#
        )
        .unwrap();

        let mut loader = MapLoader::spawn(&path);
        let scene = poll_until_done(&mut loader).unwrap();
        assert_eq!(scene.primitive_count(), 1);

        // Result is delivered exactly once
        assert!(loader.poll().is_none());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut loader = MapLoader::spawn("/nonexistent/liminal_missing.json");
        match poll_until_done(&mut loader) {
            Err(MapLoadError::Io(_)) => {}
            other => panic!("expected Io error, got {:?}", other.map(|_| "scene")),
        }
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let path = temp_map_path("malformed");
        std::fs::write(&path, "{ not json").unwrap();

        let mut loader = MapLoader::spawn(&path);
        match poll_until_done(&mut loader) {
            Err(MapLoadError::Json(_)) => {}
            other => panic!("expected Json error, got {:?}", other.map(|_| "scene")),
        }
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_error_display() {
        let err = MapLoadError::WorkerGone;
        assert!(err.to_string().contains("loader thread"));

        let err: MapLoadError = serde_json::from_str::<MapScene>("nope").unwrap_err().into();
        assert!(err.to_string().contains("decode"));
    }
}
