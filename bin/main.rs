use failure::{format_err, Error};
use lifecube_lib::*;
use log::{error, info};
use std::time::Instant;

use winit::{
    event::{ElementState, Event, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

async fn run(event_loop: EventLoop<()>, window: Window) -> Result<(), Error> {
    let config = CubeConfig::from_env()?;
    let mut render_state = RenderState::new(&window).await?;
    let mut simulation = Simulation::new(config)?;

    let dims = *simulation.automata().dims();
    let mut cube_renderer = CubeRenderer::new(
        &render_state.device,
        &render_state.transform_layout,
        render_state.surface_format,
        &dims,
    );
    let mut camera = CubeCamera::new(dims.width as f32);

    let mut pending = FrameInput::default();
    let mut last_draw = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                render_state.reconfigure(size.width, size.height);
                window.request_redraw();
            }
            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        input:
                            winit::event::KeyboardInput {
                                virtual_keycode: Some(keycode),
                                state,
                                ..
                            },
                        ..
                    },
                ..
            } => {
                if camera.key(keycode, state) || state != ElementState::Pressed {
                    return;
                }
                if keycode == VirtualKeyCode::Escape {
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                apply_key(&mut pending, keycode);
            }
            Event::RedrawRequested(_) => {
                let now = Instant::now();
                camera.update((now - last_draw).as_secs_f32());
                last_draw = now;

                // One frame: input, maybe a generation, then the color table.
                let input = std::mem::take(&mut pending);
                let colors = simulation.frame(&input);
                cube_renderer.upload(&render_state.queue, colors);

                let frame = match render_state.surface.get_current_texture() {
                    Ok(frame) => frame,
                    Err(err) => {
                        error!("Failed to acquire next swap chain texture: {}", err);
                        window.request_redraw();
                        return;
                    }
                };

                let view = frame
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                let mut encoder = render_state
                    .device
                    .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
                {
                    let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: None,
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: 0.08,
                                    g: 0.08,
                                    b: 0.1,
                                    a: 1.,
                                }),
                                store: true,
                            },
                        })],
                        depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                            view: &render_state.depth_buffer_view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: true,
                            }),
                            stencil_ops: None,
                        }),
                    });

                    render_state.set_transform(camera.transform(render_state.aspect()));

                    rpass.set_bind_group(0, &render_state.transform_bind_group, &[]);
                    cube_renderer.draw(&mut rpass);
                }

                render_state.queue.submit(Some(encoder.finish()));
                frame.present();

                window.request_redraw();
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(
                    "Closing after {} generations",
                    simulation.automata().generation()
                );
                *control_flow = ControlFlow::Exit
            }
            _ => {}
        }
    })
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("LifeCube")
        .build(&event_loop)
        .map_err(|err| format_err!("could not open a window: {}", err))?;
    pollster::block_on(run(event_loop, window))
}
