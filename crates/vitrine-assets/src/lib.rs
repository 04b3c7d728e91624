//! Vitrine Assets - Mesh asset fetching and decoding
//!
//! Fetches scene files from the asset service by URL and decodes them into
//! renderer-agnostic triangle meshes. Network fetch and decode run on a
//! background runtime; results are polled from the frame loop.

mod decode;
mod error;
mod fetch;
mod mesh;

pub use decode::decode_gltf;
pub use error::LoadError;
pub use fetch::{LoadPhase, MeshFetcher, PendingLoad};
pub use mesh::MeshAsset;
