//! Asynchronous mesh fetching
//!
//! Owns a background tokio runtime so network fetch and decode never block
//! the frame loop. Results come back through a channel the viewer polls
//! once per frame.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{mpsc, Arc};

use reqwest::Client;
use tracing::debug;

use crate::decode;
use crate::error::LoadError;
use crate::mesh::MeshAsset;

/// Phase of an in-flight load, for host UI progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Downloading bytes from the asset service
    Fetching,
    /// Decoding the payload into a mesh
    Decoding,
}

impl LoadPhase {
    /// Get the progress fraction for this phase (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        match self {
            Self::Fetching => 0.0,
            Self::Decoding => 0.7,
        }
    }

    /// Get a human-readable description of this phase.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fetching => "Downloading geometry...",
            Self::Decoding => "Decoding geometry...",
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            Self::Fetching => 0,
            Self::Decoding => 1,
        }
    }

    fn from_u8(value: u8) -> Self {
        if value == 1 {
            Self::Decoding
        } else {
            Self::Fetching
        }
    }
}

/// A non-blocking handle to an in-flight mesh load.
/// Call `try_recv()` each frame to check for the result without blocking.
pub struct PendingLoad {
    receiver: mpsc::Receiver<Result<MeshAsset, LoadError>>,
    phase: Arc<AtomicU8>,
}

impl PendingLoad {
    /// Non-blocking check for the result. Returns `None` if still pending.
    pub fn try_recv(&self) -> Option<Result<MeshAsset, LoadError>> {
        self.receiver.try_recv().ok()
    }

    /// Blocking wait for the result. Only use outside the frame loop.
    pub fn wait(self) -> Result<MeshAsset, LoadError> {
        self.receiver
            .recv()
            .map_err(|_| LoadError::Network("channel closed".into()))?
    }

    /// Current phase of the load.
    pub fn phase(&self) -> LoadPhase {
        LoadPhase::from_u8(self.phase.load(Ordering::Relaxed))
    }
}

/// Fetches mesh assets over HTTP and decodes them off the frame loop.
///
/// The client carries no request timeout: a hung load stays pending, and
/// the viewer surfaces it as a perpetual loading state.
pub struct MeshFetcher {
    runtime: tokio::runtime::Runtime,
    client: Client,
}

impl MeshFetcher {
    /// Create a fetcher with a background tokio runtime.
    pub fn new() -> Result<Self, LoadError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|e| LoadError::Network(format!("failed to create runtime: {}", e)))?;

        let client = Client::builder()
            .build()
            .map_err(|e| LoadError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { runtime, client })
    }

    /// Begin fetching and decoding the asset at `url`.
    ///
    /// Dropping the returned handle abandons the load: the task keeps
    /// running to completion but its result goes nowhere.
    pub fn fetch(&self, url: String) -> PendingLoad {
        let (tx, rx) = mpsc::channel();
        let phase = Arc::new(AtomicU8::new(LoadPhase::Fetching.as_u8()));
        let client = self.client.clone();
        let task_phase = Arc::clone(&phase);

        self.runtime.spawn(async move {
            let result = fetch_and_decode(client, url, task_phase).await;
            let _ = tx.send(result);
        });

        PendingLoad {
            receiver: rx,
            phase,
        }
    }
}

async fn fetch_and_decode(
    client: Client,
    url: String,
    phase: Arc<AtomicU8>,
) -> Result<MeshAsset, LoadError> {
    debug!("fetching '{}'", url);
    let response = client.get(&url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    phase.store(LoadPhase::Decoding.as_u8(), Ordering::Relaxed);
    let mesh = decode::decode_gltf(&bytes)?;
    debug!(
        "fetched '{}': {} bytes, {} vertices",
        url,
        bytes.len(),
        mesh.vertex_count()
    );
    Ok(mesh)
}
