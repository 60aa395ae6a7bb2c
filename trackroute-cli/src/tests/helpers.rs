//! Test helpers for staging waypoint files in temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Four Lucknow division sites, the maintenance site carrying top priority.
pub(super) const LUCKNOW_WAYPOINTS: &str = r#"[
  { "id": "LKO", "lat": 26.8467, "lng": 80.9462, "name": "Lucknow", "type": "station" },
  { "id": "J-114", "lat": 26.781, "lng": 80.882, "name": "Joint 114", "type": "joint", "priority": 2 },
  { "id": "M-07", "lat": 26.6, "lng": 80.65, "name": "Relay hut 7", "type": "maintenance",
    "priority": 3, "estimatedTime": 45 },
  { "id": "KNP", "lat": 26.4499, "lng": 80.3319, "name": "Kanpur", "type": "station", "priority": 1 }
]"#;

/// A temporary directory addressed by UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}
