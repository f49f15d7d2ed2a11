use super::SolverPlan;
use crate::core_types::ToolParameters;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info};

/// Receives solver updates. Returning `false` from `on_tick` aborts the run.
pub trait ProgressCallback: Send + Sync {
    fn on_tick(&self, tick: usize, params: &ToolParameters) -> bool;

    fn on_complete(&self, _outcome: &SolverOutcome) {}
}

/// No-op callback for headless runs.
impl ProgressCallback for () {
    fn on_tick(&self, _tick: usize, _params: &ToolParameters) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOutcome {
    pub params: ToolParameters,
    pub ticks_run: usize,
    pub completed: bool,
}

pub struct Solver {
    plan: SolverPlan,
    tick: Duration,
}

impl Solver {
    pub fn new(plan: SolverPlan, tick: Duration) -> Self {
        Self { plan, tick }
    }

    pub fn plan(&self) -> &SolverPlan {
        &self.plan
    }

    /// Runs every tick on the calling thread, sleeping one period before each.
    pub fn run_blocking<CB: ProgressCallback + ?Sized>(
        &self,
        cancel: &AtomicBool,
        callback: &CB,
    ) -> SolverOutcome {
        info!(
            "Solver started: {} over {} ticks",
            self.plan.strategy, self.plan.ticks
        );

        let mut current = self.plan.start;
        let mut ticks_run = 0;
        let mut completed = true;

        for tick in 1..=self.plan.ticks {
            if !self.tick.is_zero() {
                thread::sleep(self.tick);
            }
            if cancel.load(Ordering::Acquire) {
                completed = false;
                break;
            }

            current = self.plan.state_at(tick);
            ticks_run = tick;
            debug!(
                tick,
                diameter = current.diameter,
                curvature = current.curvature,
                "solver tick"
            );

            if !callback.on_tick(tick, &current) {
                completed = false;
                break;
            }
        }

        let outcome = SolverOutcome {
            params: current,
            ticks_run,
            completed,
        };
        if completed {
            info!(
                "Solver converged. Material set to {}",
                current.material.display_name()
            );
        } else {
            info!("Solver stopped after {} ticks", ticks_run);
        }
        callback.on_complete(&outcome);
        outcome
    }

    /// Moves the run onto its own thread and hands back the cancellation handle.
    pub fn spawn<CB: ProgressCallback + 'static>(self, callback: CB) -> SolverHandle {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = cancel.clone();
        let thread = thread::spawn(move || self.run_blocking(&flag, &callback));
        SolverHandle {
            cancel,
            thread: Some(thread),
        }
    }
}

pub struct SolverHandle {
    cancel: Arc<AtomicBool>,
    thread: Option<JoinHandle<SolverOutcome>>,
}

impl SolverHandle {
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Release);
    }

    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Waits for the run to end. `None` if the worker panicked or was already joined.
    pub fn join(mut self) -> Option<SolverOutcome> {
        self.thread.take().and_then(|t| t.join().ok())
    }
}

impl Drop for SolverHandle {
    fn drop(&mut self) {
        self.cancel();
        if let Some(t) = self.thread.take() {
            let _ = t.join();
        }
    }
}
