//! Window display sink built on winit and pixels.
//!
//! The event loop owns the cadence here: each pass through
//! `MainEventsCleared` ticks the driver once the frame interval has elapsed,
//! blits the mask into the pixel buffer as 0/255 grayscale, and requests a
//! redraw. Closing the window exits the loop, which drops the driver.

use std::time::Instant;

use log::error;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::compute::Mask;
use crate::render::FrameDriver;

/// Errors from window and surface setup.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("framebuffer setup failed: {0}")]
    Surface(#[from] pixels::Error),
}

/// Expand a binary mask into the RGBA pixel buffer (1 -> white, 0 -> black).
fn blit(mask: &Mask, frame: &mut [u8]) {
    for (pixel, &v) in frame.chunks_exact_mut(4).zip(mask.data.iter()) {
        let luma = v * 255;
        pixel.copy_from_slice(&[luma, luma, luma, 255]);
    }
}

/// Open a window and animate the scene until the window is closed.
///
/// Never returns on success; the process exits with the event loop.
pub fn run_windowed(mut driver: FrameDriver, title: &str) -> Result<(), RenderError> {
    let (width, height) = driver.dimensions();
    let (width, height) = (width as u32, height as u32);
    let frame_interval = driver.frame_interval();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(LogicalSize::new(width, height))
        .build(&event_loop)?;

    let surface_texture = SurfaceTexture::new(width, height, &window);
    let mut pixels = Pixels::new(width, height, surface_texture)?;
    let mut next_frame = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                driver.stop();
                *control_flow = ControlFlow::Exit;
            }
            Event::MainEventsCleared => {
                if driver.is_stopped() || Instant::now() < next_frame {
                    return;
                }
                next_frame = Instant::now() + frame_interval;

                match driver.tick() {
                    Ok(mask) => {
                        blit(&mask, pixels.frame_mut());
                        window.request_redraw();
                    }
                    Err(e) => {
                        error!("tick failed: {}", e);
                        *control_flow = ControlFlow::Exit;
                    }
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = pixels.render() {
                    error!("surface lost: {}", e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => (),
        }
    });
}
