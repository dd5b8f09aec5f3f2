// File: crates/chart-window/src/lib.rs
// Summary: Blocking chart viewer: renders chart-core to a window via RGBA blit (CPU) using winit + softbuffer.

pub mod frame;
pub mod nav;

use std::num::NonZeroU32;

use chart_core::types::DEFAULT_DPI;
use chart_core::{Chart, RenderOptions, ViewState};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::{Window, WindowBuilder};

use crate::nav::Navigator;

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("no display available (neither DISPLAY nor WAYLAND_DISPLAY is set)")]
    NoDisplay,
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("frame buffer error: {0}")]
    Surface(String),
    #[error("render failed: {0:#}")]
    Render(#[from] anyhow::Error),
}

#[derive(Clone, Debug)]
pub struct ViewerOptions {
    pub title: String,
    /// Initial inner size in logical pixels.
    pub width: f64,
    pub height: f64,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self { title: "Figure 1".to_string(), width: 1000.0, height: 600.0 }
    }
}

/// Whether a window can be opened at all. Only X11/Wayland hosts can be without one.
pub fn display_available() -> bool {
    if cfg!(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android")))) {
        std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
    } else {
        true
    }
}

/// Open a window showing `chart` and block until it is closed.
///
/// Left-drag pans, the wheel zooms around the cursor, `R`/`Home` restores the initial
/// view and `Esc`/`Q` closes the window.
pub fn show(mut chart: Chart, opts: &ViewerOptions) -> Result<(), ViewerError> {
    if !display_available() {
        return Err(ViewerError::NoDisplay);
    }

    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(opts.title.as_str())
        .with_inner_size(LogicalSize::new(opts.width, opts.height))
        .build(&event_loop)
        .map_err(|e| ViewerError::Window(e.to_string()))?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| ViewerError::Surface(e.to_string()))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| ViewerError::Surface(e.to_string()))?;

    let mut nav = Navigator::new(ViewState::from_axes(&chart));
    let mut failure: Option<ViewerError> = None;
    log::debug!("viewer opened: {}", opts.title);

    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => window.request_redraw(),
                WindowEvent::CursorMoved { position, .. } => {
                    if nav.cursor_moved(position.x, position.y) {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => nav.cursor_left(),
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                    nav.set_dragging(state == ElementState::Pressed);
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    if nav.scroll(scroll_amount(delta)) {
                        window.request_redraw();
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape | VirtualKeyCode::Q => *control_flow = ControlFlow::Exit,
                    VirtualKeyCode::R | VirtualKeyCode::Home => {
                        nav.reset();
                        window.request_redraw();
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = redraw(&mut chart, &window, &mut surface, &mut nav) {
                    failure = Some(e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    log::debug!("viewer closed");
    failure.map_or(Ok(()), Err)
}

/// Wheel delta as a zoom amount: one notch is 10%.
fn scroll_amount(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64 * 0.1,
        MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
    }
}

fn redraw(
    chart: &mut Chart,
    window: &Window,
    surface: &mut softbuffer::Surface,
    nav: &mut Navigator,
) -> Result<(), ViewerError> {
    let size = window.inner_size();
    // Minimized windows report a zero size; nothing to draw.
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| ViewerError::Surface(e.to_string()))?;

    let mut opts = RenderOptions::default();
    opts.width = size.width as i32;
    opts.height = size.height as i32;
    opts.dpi = DEFAULT_DPI * window.scale_factor() as f32;

    nav.view.apply_to_chart(chart);
    nav.set_frame(opts.width, opts.height, chart.plot_insets(&opts));
    let (rgba, _, _, _) = chart.render_to_rgba8(&opts)?;

    let mut buffer = surface.buffer_mut().map_err(|e| ViewerError::Surface(e.to_string()))?;
    frame::rgba_to_0rgb(&rgba, &mut buffer);
    buffer.present().map_err(|e| ViewerError::Surface(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_notch_is_ten_percent() {
        assert!((scroll_amount(MouseScrollDelta::LineDelta(0.0, 1.0)) - 0.1).abs() < 1e-9);
        assert!((scroll_amount(MouseScrollDelta::LineDelta(0.0, -2.0)) + 0.2).abs() < 1e-9);
    }

    #[cfg(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))]
    #[test]
    fn show_without_display_returns_no_display() {
        std::env::remove_var("DISPLAY");
        std::env::remove_var("WAYLAND_DISPLAY");
        assert!(!display_available());
        let err = show(Chart::new(), &ViewerOptions::default()).unwrap_err();
        assert!(matches!(err, ViewerError::NoDisplay), "got {err}");
    }

    #[test]
    fn default_window_matches_ten_by_six_figure() {
        let o = ViewerOptions::default();
        assert_eq!((o.width, o.height), (1000.0, 600.0));
    }
}
