use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::core::engine_options::EngineOptions;
use crate::core::presentation::PresentationContext;
use crate::core::snapshot::Orientation;
use crate::window::surface::HeadlessSurface;

pub const HORIZONTAL_WINDOW: (u32, u32) = (1920, 1080);
pub const VERTICAL_WINDOW: (u32, u32) = (1080, 1920);

const PUMP_INTERVAL: Duration = Duration::from_millis(5);

/// Size and position for a presentation window: the orientation preset,
/// centered on the available screen width, top-aligned.
pub fn window_rect(orientation: Orientation, screen: (u32, u32)) -> ((u32, u32), (u32, u32)) {
    let size = match orientation {
        Orientation::Horizontal => HORIZONTAL_WINDOW,
        Orientation::Vertical => VERTICAL_WINDOW,
    };
    let left = screen.0.saturating_sub(size.0) / 2;
    (size, (left, 0))
}

/// A detached presentation context running its own loop. It depends on its
/// opener only through the shared channel name; closing it stops its loop
/// and clears its subscription without touching the control side.
pub struct PresentationWindow {
    closed: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl PresentationWindow {
    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.closed.store(true, Ordering::Release);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for PresentationWindow {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Opens the second window of a session. Creation can be refused by the
/// host environment; that is detected here and left as a no-op, with the
/// control window carrying on standalone.
pub fn open_presentation_window(
    options: &EngineOptions,
    orientation: Orientation,
) -> Option<PresentationWindow> {
    let (size, position) = window_rect(orientation, options.screen_size);
    let channel = options.channel.clone();
    let closed = Arc::new(AtomicBool::new(false));
    let flag = closed.clone();

    let spawned = thread::Builder::new()
        .name(String::from("presentation-window"))
        .spawn(move || {
            let surface = HeadlessSurface::new((size.0 as f64, size.1 as f64));
            let mut context = PresentationContext::new(channel.as_str(), surface);

            while !flag.load(Ordering::Acquire) {
                context.pump(Instant::now());
                thread::sleep(PUMP_INTERVAL);
            }
        });

    match spawned {
        Ok(worker) => {
            info!(
                "|= presentation window {}x{} at {:?}",
                size.0, size.1, position
            );
            Some(PresentationWindow {
                closed,
                worker: Some(worker),
            })
        }
        Err(error) => {
            warn!("=| presentation window refused: {}", error);
            None
        }
    }
}
