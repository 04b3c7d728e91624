//! Viewer orchestration
//!
//! Drives the load, frame, rotate pipeline and owns the state machine
//! exposed to the host UI.

use glam::Quat;
use tracing::{debug, warn};

use vitrine_assets::{LoadError, LoadPhase, MeshAsset, MeshFetcher, PendingLoad};
use vitrine_core::{BoundingBox, TimeOfDay};

use crate::config::ViewerConfig;
use crate::framing;
use crate::state::{RequestId, ViewerState};

/// A single model viewer instance.
///
/// The host rendering surface calls [`tick`](Self::tick) once per frame;
/// everything else is driven by UI selections. The mesh and its bounds are
/// exclusively owned here: state replacement is atomic from the frame
/// callback's point of view, which always sees one complete [`ViewerState`].
pub struct Viewer {
    config: ViewerConfig,
    fetcher: MeshFetcher,
    state: ViewerState,
    pending: Option<(RequestId, PendingLoad)>,
    next_request_id: RequestId,
    time_of_day: TimeOfDay,
}

impl Viewer {
    /// Create a viewer with the default configuration.
    pub fn new() -> Result<Self, LoadError> {
        Self::with_config(ViewerConfig::default())
    }

    /// Create a viewer with a custom configuration.
    pub fn with_config(config: ViewerConfig) -> Result<Self, LoadError> {
        Ok(Self {
            config,
            fetcher: MeshFetcher::new()?,
            state: ViewerState::Idle,
            pending: None,
            next_request_id: 0,
            time_of_day: TimeOfDay::default(),
        })
    }

    /// Begin loading a new asset.
    ///
    /// Supersedes any load still in flight: the old channel is dropped here
    /// and its task's eventual result goes nowhere. Even a result that
    /// slipped into the channel first is rejected by the request-id check.
    pub fn select_asset(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        debug!("selecting '{}' (request {})", url, request_id);

        let pending = self.fetcher.fetch(url.clone());
        self.pending = Some((request_id, pending));
        self.state = ViewerState::Loading { url, request_id };
    }

    /// Set the time of day driving the model's orientation.
    /// Out-of-range values wrap on the 24-hour cycle.
    pub fn set_time_of_day(&mut self, hours: f32) {
        self.time_of_day.set(hours);
    }

    /// Current time of day in hours.
    pub fn time_of_day(&self) -> f32 {
        self.time_of_day.hours()
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Progress phase of the in-flight load, if any.
    pub fn load_phase(&self) -> Option<LoadPhase> {
        self.pending.as_ref().map(|(_, pending)| pending.phase())
    }

    /// Rotation applied to the displayed mesh for the current time of day.
    ///
    /// Recomputed from the time value every frame; no angular velocity is
    /// stored, so there is no drift to accumulate.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.time_of_day.rotation_angle())
    }

    /// Per-frame hook for the rendering surface.
    ///
    /// Polls the in-flight load, publishes any resulting state transition,
    /// and returns the rotation to apply to the mesh this frame.
    pub fn tick(&mut self) -> Quat {
        if let Some((request_id, pending)) = &self.pending {
            if let Some(result) = pending.try_recv() {
                let request_id = *request_id;
                self.pending = None;
                self.apply_load_result(request_id, result);
            }
        }
        self.rotation()
    }

    /// Apply a finished load. Only the result stamped with the current
    /// `Loading` state's request id may transition the state; anything else
    /// is a superseded load and is discarded.
    fn apply_load_result(&mut self, request_id: RequestId, result: Result<MeshAsset, LoadError>) {
        let ViewerState::Loading {
            url,
            request_id: current_id,
        } = &self.state
        else {
            debug!("discarding load result {} outside Loading", request_id);
            return;
        };

        if *current_id != request_id {
            debug!(
                "discarding superseded load result (request {}, current {})",
                request_id, current_id
            );
            return;
        }

        let url = url.clone();
        match result {
            Ok(mut mesh) => {
                // The loader rejects empty geometry before a mesh gets here.
                let Some(bounds) = BoundingBox::from_positions(&mesh.positions) else {
                    self.state = ViewerState::Error {
                        url,
                        cause: LoadError::EmptyGeometry,
                    };
                    return;
                };

                // Re-center once so rotation happens about the object's true
                // centroid rather than its file-space origin.
                let center = bounds.center();
                mesh.translate(-center);
                let centered = bounds.translated(-center);

                let frame = framing::frame(
                    &centered,
                    self.config.fov_degrees.to_radians(),
                    self.config.fit_margin,
                    self.config.min_extent,
                );

                debug!(
                    "'{}' ready: {} vertices, {} triangles, camera distance {:.3}",
                    url,
                    mesh.vertex_count(),
                    mesh.triangle_count(),
                    frame.distance
                );
                self.state = ViewerState::Ready { mesh, frame };
            }
            Err(cause) => {
                warn!("load failed for '{}': {}", url, cause);
                self.state = ViewerState::Error { url, cause };
            }
        }
    }
}
