//! glTF decoding into a renderable mesh

use tracing::debug;

use crate::error::LoadError;
use crate::mesh::MeshAsset;

/// Decode a glTF 2.0 payload (.glb or embedded .gltf) into a single mesh.
///
/// All triangle primitives in the document are merged into one triangle
/// soup with rebased indices. Primitives with a non-triangle topology are
/// skipped. A payload that decodes to zero vertices is rejected.
pub fn decode_gltf(bytes: &[u8]) -> Result<MeshAsset, LoadError> {
    let (document, buffers, _images) =
        gltf::import_slice(bytes).map_err(|e| LoadError::Parse(e.to_string()))?;

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut indices: Vec<[u32; 3]> = Vec::new();
    let mut name: Option<String> = None;

    for mesh in document.meshes() {
        if name.is_none() {
            name = mesh.name().map(str::to_string);
        }

        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                debug!("skipping non-triangle primitive in mesh '{}'", mesh.name().unwrap_or("unnamed"));
                continue;
            }

            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

            let prim_positions: Vec<[f32; 3]> = reader
                .read_positions()
                .map(|iter| iter.collect())
                .unwrap_or_default();
            if prim_positions.is_empty() {
                continue;
            }

            let prim_normals: Vec<[f32; 3]> = reader
                .read_normals()
                .map(|iter| iter.collect())
                .unwrap_or_default();

            let base = positions.len() as u32;
            let vertex_count = prim_positions.len() as u32;

            match reader.read_indices() {
                Some(read) => {
                    let raw: Vec<u32> = read.into_u32().collect();
                    if raw.len() % 3 != 0 {
                        return Err(LoadError::Parse(format!(
                            "index count {} is not a multiple of three",
                            raw.len()
                        )));
                    }
                    for triangle in raw.chunks_exact(3) {
                        for &index in triangle {
                            if index >= vertex_count {
                                return Err(LoadError::Parse(format!(
                                    "face references out-of-range vertex index {} (vertex count {})",
                                    index, vertex_count
                                )));
                            }
                        }
                        indices.push([base + triangle[0], base + triangle[1], base + triangle[2]]);
                    }
                }
                None => {
                    // Non-indexed triangles: consecutive vertices form faces.
                    if vertex_count % 3 != 0 {
                        return Err(LoadError::Parse(format!(
                            "non-indexed primitive has {} vertices, not a multiple of three",
                            vertex_count
                        )));
                    }
                    for face in 0..vertex_count / 3 {
                        let i = base + face * 3;
                        indices.push([i, i + 1, i + 2]);
                    }
                }
            }

            positions.extend(prim_positions);
            normals.extend(prim_normals);
        }
    }

    if positions.is_empty() {
        return Err(LoadError::EmptyGeometry);
    }

    // Normals are kept only when every merged primitive supplied them.
    let normals = (normals.len() == positions.len()).then_some(normals);

    let name = name.unwrap_or_else(|| "unnamed".to_string());
    debug!(
        "decoded '{}': {} vertices, {} triangles",
        name,
        positions.len(),
        indices.len()
    );

    Ok(MeshAsset {
        name,
        positions,
        normals,
        indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE_GLTF: &str = r#"{"asset":{"version":"2.0"},"buffers":[{"uri":"data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAAAAABAAIA","byteLength":42}],"bufferViews":[{"buffer":0,"byteOffset":0,"byteLength":36},{"buffer":0,"byteOffset":36,"byteLength":6}],"accessors":[{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0,0,0],"max":[1,1,0]},{"bufferView":1,"componentType":5123,"count":3,"type":"SCALAR"}],"meshes":[{"name":"tri","primitives":[{"attributes":{"POSITION":0},"indices":1}]}],"nodes":[{"mesh":0}],"scenes":[{"nodes":[0]}],"scene":0}"#;

    // Same document with its index buffer referencing vertex 9 of 3.
    const BAD_INDEX_GLTF: &str = r#"{"asset":{"version":"2.0"},"buffers":[{"uri":"data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAAAAABAAkA","byteLength":42}],"bufferViews":[{"buffer":0,"byteOffset":0,"byteLength":36},{"buffer":0,"byteOffset":36,"byteLength":6}],"accessors":[{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0,0,0],"max":[1,1,0]},{"bufferView":1,"componentType":5123,"count":3,"type":"SCALAR"}],"meshes":[{"name":"tri","primitives":[{"attributes":{"POSITION":0},"indices":1}]}],"nodes":[{"mesh":0}],"scenes":[{"nodes":[0]}],"scene":0}"#;

    #[test]
    fn decodes_single_triangle() {
        let mesh = decode_gltf(TRIANGLE_GLTF.as_bytes()).unwrap();
        assert_eq!(mesh.name, "tri");
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.indices[0], [0, 1, 2]);
        assert_eq!(mesh.positions[1], [1.0, 0.0, 0.0]);
        assert!(mesh.normals.is_none());
    }

    #[test]
    fn out_of_range_index_is_parse_error() {
        let result = decode_gltf(BAD_INDEX_GLTF.as_bytes());
        match result {
            Err(LoadError::Parse(message)) => assert!(message.contains("out-of-range")),
            other => panic!("expected Parse error, got: {:?}", other),
        }
    }

    #[test]
    fn garbage_bytes_are_parse_error() {
        let result = decode_gltf(b"definitely not a scene file");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn document_without_meshes_is_empty_geometry() {
        let result = decode_gltf(br#"{"asset":{"version":"2.0"}}"#);
        assert!(matches!(result, Err(LoadError::EmptyGeometry)));
    }
}
