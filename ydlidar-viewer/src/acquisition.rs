use crate::driver::{LidarDriver, SensorSession};
use crate::numeric::frame_to_points;
use crate::plot::{RenderStatus, ScanRenderer};
use crate::signal::do_terminate;
use crate::time::sleep_ms;
use crossbeam_channel::Receiver;
use ydlidar_data::{Point2D, ScanFrame};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    GrabFailed,
    Stopped,
}

/// What ended the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Interrupted,
    WindowClosed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames_rendered: u64,
    pub failed_grabs: u64,
    pub stop_reason: StopReason,
}

/// Grab, transform and draw until interrupted.
pub struct AcquisitionLoop<'d, D: LidarDriver, R: ScanRenderer> {
    session: SensorSession<'d, D>,
    renderer: R,
    frame: ScanFrame,
    points: Vec<Point2D>,
    terminator_rx: Receiver<bool>,
    cycle_delay_ms: u64,
    state: LoopState,
    frames_rendered: u64,
    failed_grabs: u64,
}

impl<'d, D: LidarDriver, R: ScanRenderer> AcquisitionLoop<'d, D, R> {
    pub fn new(
        session: SensorSession<'d, D>,
        renderer: R,
        n_points: usize,
        terminator_rx: Receiver<bool>,
        cycle_delay_ms: u64,
    ) -> Self {
        AcquisitionLoop {
            session,
            renderer,
            frame: ScanFrame::new(n_points),
            points: Vec::with_capacity(n_points),
            terminator_rx,
            cycle_delay_ms,
            state: LoopState::Running,
            frames_rendered: 0,
            failed_grabs: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// One cycle: check for an interrupt, grab, then draw or redraw.
    ///
    /// Returns why the loop has to stop, if it does.
    pub fn step(&mut self) -> Option<StopReason> {
        if do_terminate(&self.terminator_rx) {
            return Some(StopReason::Interrupted);
        }
        self.state = LoopState::Running;

        let status = match self.session.grab(&mut self.frame) {
            Ok(()) => {
                frame_to_points(&self.frame, &mut self.points);
                let status = self.renderer.draw(&self.points);
                self.frames_rendered += 1;
                if status == RenderStatus::Open {
                    sleep_ms(self.cycle_delay_ms);
                }
                status
            }
            Err(e) => {
                self.state = LoopState::GrabFailed;
                self.failed_grabs += 1;
                log::warn!("{e}");
                self.renderer.idle()
            }
        };

        match status {
            RenderStatus::Open => None,
            RenderStatus::Closed => Some(StopReason::WindowClosed),
        }
    }

    /// Runs until the terminator channel fires or the renderer closes, then
    /// powers the sensor off.
    pub fn run(&mut self) -> LoopSummary {
        let stop_reason = loop {
            if let Some(reason) = self.step() {
                break reason;
            }
        };

        log::info!("Exiting...");
        self.session.shutdown();
        self.state = LoopState::Stopped;

        LoopSummary {
            frames_rendered: self.frames_rendered,
            failed_grabs: self.failed_grabs,
            stop_reason,
        }
    }
}
