pub mod context;
pub mod mesh;
pub mod shader;
pub mod transform;

pub use context::Gpu;
pub use mesh::{Mesh, Vertex};
pub use shader::{Shader, Uniforms};
