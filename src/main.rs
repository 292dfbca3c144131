use anyhow::{Context as _, Result};
use glfw::{Action, Key};
use wirepyramid::{Gpu, Mesh, Shader, Uniforms, transform};

const WINDOW_TITLE: &str = "Wireframe Pyramid";
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

/// Everything the render loop touches, created once in `run` and dropped
/// when it returns. The mesh and shader live exactly as long as this value.
struct State {
    gpu: Gpu,
    mesh: Mesh,
    shader: Shader,
}

impl State {
    async fn new(context: glfw::PRenderContext, size: (u32, u32)) -> Result<Self> {
        let gpu = Gpu::new(context, size).await?;
        let mesh = Mesh::pyramid(gpu.device(), gpu.queue());
        let shader = Shader::new(gpu.device(), gpu.surface_format()).await?;

        Ok(Self { gpu, mesh, shader })
    }

    fn resize(&mut self, new_size: (u32, u32)) {
        self.gpu.resize(new_size);
    }

    /// Recomputes the fixed model/view/projection set against the current
    /// framebuffer size and writes it to the uniform buffer.
    fn update(&mut self) {
        let (width, height) = self.gpu.size();
        let uniforms = Uniforms::new(
            transform::model_matrix(),
            transform::view_matrix(),
            transform::projection_matrix(width, height),
        );
        self.shader.upload_uniforms(self.gpu.queue(), &uniforms);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.gpu.surface().get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.gpu.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
                multiview_mask: None,
            });

            self.shader.bind(&mut render_pass);
            self.mesh.bind(&mut render_pass);
            self.mesh.draw(&mut render_pass);
        }

        self.gpu.queue().submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn run() -> Result<()> {
    let mut glfw = glfw::init(glfw::fail_on_errors).context("failed to initialize GLFW")?;

    // wgpu owns the graphics API; the window carries no GL context of its own.
    glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
    glfw.window_hint(glfw::WindowHint::Resizable(true));

    let (mut window, events) = glfw
        .create_window(
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            WINDOW_TITLE,
            glfw::WindowMode::Windowed,
        )
        .context("failed to create GLFW window")?;

    window.set_key_polling(true);
    window.set_framebuffer_size_polling(true);

    let context = window.render_context();
    let mut state = pollster::block_on(State::new(context, (WINDOW_WIDTH, WINDOW_HEIGHT)))?;

    while !window.should_close() {
        glfw.poll_events();
        for (_, event) in glfw::flush_messages(&events) {
            match event {
                glfw::WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                    window.set_should_close(true)
                }
                glfw::WindowEvent::FramebufferSize(width, height) => {
                    state.resize((width as u32, height as u32));
                }
                _ => {}
            }
        }

        state.update();

        match state.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => state.resize(state.gpu.size()),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory, shutting down");
                window.set_should_close(true);
            }
            Err(e) => log::warn!("surface error, skipping frame: {e:?}"),
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
