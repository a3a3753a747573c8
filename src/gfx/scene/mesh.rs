use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};

use crate::error::LoadError;

use super::vertex::{VertexAttributeKind, VertexLayout};

/// CPU-side mesh ready for upload: interleaved vertices, triangle indices and
/// the layout describing them.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub name: String,
    pub layout: VertexLayout,
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
    /// Diffuse texture referenced by the model's material, relative to the
    /// material file.
    pub diffuse_texture: Option<PathBuf>,
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    }
}

impl MeshData {
    /// Loads the first model of an OBJ file.
    ///
    /// A missing or broken MTL file is not an error; the mesh is loaded
    /// without a texture.
    pub fn load_obj(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let (models, materials) = tobj::load_obj(path, &load_options())?;

        let materials = materials.unwrap_or_else(|err| {
            log::warn!("No usable MTL for {}: {}", path.display(), err);
            Vec::new()
        });

        let mesh = Self::from_models(models, &materials)?;
        log::info!(
            "Loaded mesh '{}' from {}: {} vertices, {} triangles",
            mesh.name,
            path.display(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Parses OBJ text held in memory. Material libraries are ignored.
    pub fn parse_obj(source: &str) -> Result<Self, LoadError> {
        let mut reader = BufReader::new(Cursor::new(source.as_bytes()));
        let (models, _) = tobj::load_obj_buf(&mut reader, &load_options(), |_| {
            Err(tobj::LoadError::GenericFailure)
        })?;
        Self::from_models(models, &[])
    }

    fn from_models(
        models: Vec<tobj::Model>,
        materials: &[tobj::Material],
    ) -> Result<Self, LoadError> {
        if models.len() > 1 {
            log::debug!("OBJ has {} models, using the first", models.len());
        }
        let model = models.into_iter().next().ok_or(LoadError::NoModels)?;
        let mesh = &model.mesh;

        if mesh.positions.is_empty() {
            return Err(LoadError::MissingPositions(model.name));
        }

        let vertex_count = mesh.positions.len() / 3;
        let has_normals = mesh.normals.len() == mesh.positions.len();
        let has_tex_coords = mesh.texcoords.len() == vertex_count * 2;
        let layout = VertexLayout::builder()
            .normals(has_normals)
            .tex_coords(has_tex_coords)
            .build();

        let mut vertices = Vec::with_capacity(vertex_count * layout.floats_per_vertex());
        for i in 0..vertex_count {
            vertices.extend_from_slice(&mesh.positions[i * 3..i * 3 + 3]);
            if layout.has(VertexAttributeKind::Normal) {
                vertices.extend_from_slice(&mesh.normals[i * 3..i * 3 + 3]);
            }
            if layout.has(VertexAttributeKind::TexCoord) {
                vertices.extend_from_slice(&mesh.texcoords[i * 2..i * 2 + 2]);
            }
        }

        let diffuse_texture = mesh
            .material_id
            .and_then(|id| materials.get(id))
            .and_then(|material| material.diffuse_texture.as_ref())
            .map(PathBuf::from);

        Ok(Self {
            name: model.name,
            layout,
            vertices,
            indices: mesh.indices.clone(),
            diffuse_texture,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.layout.floats_per_vertex()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex data as raw bytes for a vertex buffer.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
