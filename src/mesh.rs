use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

// Red apex over a square base of white corners.
const VERTICES: [Vertex; 5] = [
    Vertex { position: [-0.5, -0.5, 0.0], color: [1.0, 1.0, 1.0, 1.0] }, // front left
    Vertex { position: [0.0, 0.5, -0.5], color: [1.0, 0.0, 0.0, 1.0] },  // apex
    Vertex { position: [0.5, -0.5, 0.0], color: [1.0, 1.0, 1.0, 1.0] },  // front right
    Vertex { position: [-0.5, -0.5, -1.0], color: [1.0, 1.0, 1.0, 1.0] }, // back left
    Vertex { position: [0.5, -0.5, -1.0], color: [1.0, 1.0, 1.0, 1.0] },  // back right
];

const INDICES: [u16; 18] = [
    0, 1, 2, // front face
    0, 3, 1, // left face
    3, 1, 4, // back face
    4, 1, 2, // right face
    0, 3, 4, // base
    0, 4, 2, // base
];

/// The fixed pyramid geometry: one vertex buffer, one index buffer, both
/// written once at creation and immutable afterwards. Dropping the mesh
/// releases both buffers.
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl Mesh {
    pub fn pyramid(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Vertex Buffer"),
            size: std::mem::size_of_val(&VERTICES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(&VERTICES));

        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Index Buffer"),
            size: std::mem::size_of_val(&INDICES) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&index_buffer, 0, bytemuck::cast_slice(&INDICES));

        Self {
            vertex_buffer,
            index_buffer,
            index_count: INDICES.len() as u32,
        }
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn bind(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_vertices_six_triangles() {
        assert_eq!(VERTICES.len(), 5);
        assert_eq!(INDICES.len(), 18);
    }

    #[test]
    fn indices_stay_in_vertex_range() {
        assert!(INDICES.iter().all(|&i| (i as usize) < VERTICES.len()));
    }

    #[test]
    fn layout_interleaves_position_then_color() {
        let desc = Vertex::desc();
        let float = std::mem::size_of::<f32>() as u64;

        assert_eq!(desc.array_stride, 7 * float);
        assert_eq!(desc.attributes[0].offset, 0);
        assert_eq!(desc.attributes[0].shader_location, 0);
        assert_eq!(desc.attributes[1].offset, 3 * float);
        assert_eq!(desc.attributes[1].shader_location, 1);
    }

    #[test]
    fn vertex_size_matches_stride() {
        assert_eq!(
            std::mem::size_of::<Vertex>() as u64,
            Vertex::desc().array_stride
        );
    }
}
