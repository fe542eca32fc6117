use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How often the visualization advances while audio is active.
const TICK: Duration = Duration::from_millis(10);

/// Something that animates alongside the rain sound.
///
/// The audio path never passes data to the visualization; the only coupling
/// is cadence — `rotate` fires every 10 ms while the engine is active and
/// not at all while it is suspended.
pub trait Visualization: Send {
    fn rotate(&mut self);
}

/// Background thread driving [`Visualization::rotate`] on a fixed cadence.
///
/// Dropping the ticker stops the thread and joins it, so suspend is simply
/// "drop the ticker" and resume is "start a new one".
pub(crate) struct VizTicker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl VizTicker {
    pub(crate) fn start(viz: Arc<Mutex<dyn Visualization>>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("pluvio-viz".into())
            .spawn(move || {
                while !flag.load(Ordering::Relaxed) {
                    if let Ok(mut viz) = viz.lock() {
                        viz.rotate();
                    }
                    thread::sleep(TICK);
                }
            })
            .ok();
        Self { stop, handle }
    }
}

impl Drop for VizTicker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
