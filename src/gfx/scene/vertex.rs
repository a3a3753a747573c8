//! # Vertex Layout
//!
//! Describes how interleaved vertex data is laid out in a GPU buffer. Every
//! vertex has a position; normals and texture coordinates are optional.
//!
//! | attribute | components | shader location |
//! |-----------|------------|-----------------|
//! | position  | 3          | 0               |
//! | normal    | 3          | 1               |
//! | tex coord | 2          | 2               |
//!
//! ```no_run
//! use orbis::gfx::scene::VertexLayout;
//!
//! let layout = VertexLayout::builder().normals(true).tex_coords(true).build();
//! assert_eq!(layout.stride(), 32);
//! ```

use std::mem;

const FLOAT_SIZE: u64 = mem::size_of::<f32>() as u64;

/// Kind of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAttributeKind {
    Position,
    Normal,
    TexCoord,
}

impl VertexAttributeKind {
    pub fn components(self) -> u64 {
        match self {
            VertexAttributeKind::Position | VertexAttributeKind::Normal => 3,
            VertexAttributeKind::TexCoord => 2,
        }
    }

    pub fn shader_location(self) -> u32 {
        match self {
            VertexAttributeKind::Position => 0,
            VertexAttributeKind::Normal => 1,
            VertexAttributeKind::TexCoord => 2,
        }
    }

    fn format(self) -> wgpu::VertexFormat {
        match self {
            VertexAttributeKind::Position | VertexAttributeKind::Normal => {
                wgpu::VertexFormat::Float32x3
            }
            VertexAttributeKind::TexCoord => wgpu::VertexFormat::Float32x2,
        }
    }
}

/// One attribute inside an interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttributeDesc {
    pub kind: VertexAttributeKind,
    /// Byte offset from the start of the vertex.
    pub offset: u64,
}

/// Interleaved vertex layout built from attribute presence flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: Vec<VertexAttributeDesc>,
    wgpu_attributes: Vec<wgpu::VertexAttribute>,
    stride: u64,
}

impl Default for VertexLayout {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl VertexLayout {
    pub fn builder() -> VertexLayoutBuilder {
        VertexLayoutBuilder::default()
    }

    pub fn attributes(&self) -> &[VertexAttributeDesc] {
        &self.attributes
    }

    /// Size of one vertex in bytes.
    pub fn stride(&self) -> u64 {
        self.stride
    }

    /// Number of `f32` values per vertex.
    pub fn floats_per_vertex(&self) -> usize {
        (self.stride / FLOAT_SIZE) as usize
    }

    pub fn has(&self, kind: VertexAttributeKind) -> bool {
        self.attributes.iter().any(|a| a.kind == kind)
    }

    pub fn offset_of(&self, kind: VertexAttributeKind) -> Option<u64> {
        self.attributes
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.offset)
    }

    /// Returns the vertex buffer layout for wgpu rendering.
    pub fn buffer_layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.wgpu_attributes,
        }
    }
}

/// Builder for [`VertexLayout`]. Positions are always present.
#[derive(Debug, Clone, Copy, Default)]
pub struct VertexLayoutBuilder {
    normals: bool,
    tex_coords: bool,
}

impl VertexLayoutBuilder {
    pub fn normals(mut self, enabled: bool) -> Self {
        self.normals = enabled;
        self
    }

    pub fn tex_coords(mut self, enabled: bool) -> Self {
        self.tex_coords = enabled;
        self
    }

    pub fn build(self) -> VertexLayout {
        let mut kinds = vec![VertexAttributeKind::Position];
        if self.normals {
            kinds.push(VertexAttributeKind::Normal);
        }
        if self.tex_coords {
            kinds.push(VertexAttributeKind::TexCoord);
        }

        let mut offset = 0;
        let mut attributes = Vec::with_capacity(kinds.len());
        for kind in kinds {
            attributes.push(VertexAttributeDesc { kind, offset });
            offset += kind.components() * FLOAT_SIZE;
        }

        let wgpu_attributes = attributes
            .iter()
            .map(|a| wgpu::VertexAttribute {
                offset: a.offset as wgpu::BufferAddress,
                shader_location: a.kind.shader_location(),
                format: a.kind.format(),
            })
            .collect();

        VertexLayout {
            attributes,
            wgpu_attributes,
            stride: offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_only() {
        let layout = VertexLayout::default();
        assert_eq!(layout.stride(), 12);
        assert_eq!(layout.floats_per_vertex(), 3);
        assert!(!layout.has(VertexAttributeKind::Normal));
        assert_eq!(layout.offset_of(VertexAttributeKind::TexCoord), None);
    }

    #[test]
    fn test_full_layout_offsets() {
        let layout = VertexLayout::builder().normals(true).tex_coords(true).build();
        assert_eq!(layout.stride(), 32);
        assert_eq!(layout.offset_of(VertexAttributeKind::Position), Some(0));
        assert_eq!(layout.offset_of(VertexAttributeKind::Normal), Some(12));
        assert_eq!(layout.offset_of(VertexAttributeKind::TexCoord), Some(24));
    }

    #[test]
    fn test_tex_coords_without_normals_pack_tightly() {
        let layout = VertexLayout::builder().tex_coords(true).build();
        assert_eq!(layout.stride(), 20);
        assert_eq!(layout.offset_of(VertexAttributeKind::TexCoord), Some(12));
    }

    #[test]
    fn test_wgpu_buffer_layout() {
        let layout = VertexLayout::builder().normals(true).tex_coords(true).build();
        let desc = layout.buffer_layout();

        assert_eq!(desc.array_stride, 32);
        assert_eq!(desc.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(desc.attributes.len(), 3);
        assert_eq!(desc.attributes[2].shader_location, 2);
        assert_eq!(desc.attributes[2].format, wgpu::VertexFormat::Float32x2);
        assert_eq!(desc.attributes[1].offset, 12);
    }
}
