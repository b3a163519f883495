use anyhow::Context as _;
use crossbeam_channel::Sender;
use log::{error, warn};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::frame::DrawRequest;
use crate::graphics::backend::State;
use crate::input::PointerEvent;

/// Pending pointer events before the shell blocks. No drop policy; a full
/// queue stalls the toolkit callback until the forwarder catches up.
pub(crate) const POINTER_QUEUE: usize = 10;

pub(crate) fn build_window(
    event_loop: &EventLoop<()>,
    title: &str,
    width: u32,
    height: u32,
) -> anyhow::Result<Window> {
    WindowBuilder::new()
        .with_title(title)
        .with_inner_size(PhysicalSize::new(width, height))
        .build(event_loop)
        .context("failed to build window")
}

/// Drive the native event loop, translating its callbacks into messages:
/// mouse input is forwarded to the input queue, every display refresh
/// rendezvouses with the frame loop for a draw list, and each pass through
/// the loop immediately requests the next redraw.
pub(crate) fn run(
    event_loop: EventLoop<()>,
    window: Window,
    mut state: State,
    pointers: Sender<PointerEvent>,
    draws: Sender<DrawRequest>,
) -> ! {
    // Button events carry no position; track the cursor ourselves.
    let mut cursor = PhysicalPosition::new(0.0, 0.0);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => state.resize(new_size),
                WindowEvent::CursorMoved { position, .. } => cursor = position,
                WindowEvent::MouseInput {
                    state: button_state,
                    ..
                } => {
                    let event = PointerEvent {
                        phase: button_state.into(),
                        x: cursor.x as i32,
                        y: cursor.y as i32,
                    };
                    pointers.send(event).expect("input forwarder exited");
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                // Hand the frame loop a one-shot reply channel and block
                // until the drawn frame comes back; the toolkit must never
                // present a partially drawn frame.
                let (reply_tx, reply_rx) = crossbeam_channel::bounded(0);
                draws.send(reply_tx).expect("frame loop exited");
                let list = reply_rx.recv().expect("frame loop dropped the frame");

                match state.render(&list) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                        warn!("surface lost, reconfiguring");
                        state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("out of video memory");
                        *control_flow = ControlFlow::Exit;
                    }
                    Err(e) => warn!("dropped frame: {:?}", e),
                }
            }
            Event::MainEventsCleared => window.request_redraw(),
            _ => {}
        }
    })
}
