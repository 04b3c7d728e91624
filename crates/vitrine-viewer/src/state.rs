//! Viewer states exposed to the host UI

use vitrine_assets::{LoadError, MeshAsset};

use crate::framing::CameraFrame;

/// Identifier stamped on each load request. Monotonically increasing per
/// viewer; a result carrying a stale id is discarded, so the most recently
/// requested URL always wins.
pub type RequestId = u64;

/// The current viewer state
///
/// Exactly one instance per viewer. Transitions are the only mutation path:
/// a selection enters `Loading`, a load outcome enters `Ready` or `Error`,
/// and nothing leaves `Ready`/`Error` except a new selection.
#[derive(Debug)]
pub enum ViewerState {
    /// No asset selected yet
    Idle,
    /// A load is in flight for the given URL
    Loading { url: String, request_id: RequestId },
    /// A mesh is loaded, centered, and framed
    Ready { mesh: MeshAsset, frame: CameraFrame },
    /// The most recent load failed
    Error { url: String, cause: LoadError },
}

impl ViewerState {
    /// Check if no asset has been selected
    pub fn is_idle(&self) -> bool {
        matches!(self, ViewerState::Idle)
    }

    /// Check if a load is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewerState::Loading { .. })
    }

    /// Check if a mesh is loaded and framed
    pub fn is_ready(&self) -> bool {
        matches!(self, ViewerState::Ready { .. })
    }

    /// Check if the most recent load failed
    pub fn is_error(&self) -> bool {
        matches!(self, ViewerState::Error { .. })
    }
}
