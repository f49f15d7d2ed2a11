use crate::config::Config;
use crate::core_types::{GripType, HandSize, Material, ParameterBounds, ToolParameters};
use crate::error::{ErgoError, ErgoResult};
use crate::optimizer::{ProgressCallback, Solver, SolverHandle, SolverOutcome, SolverPlan, Strategy};
use crate::presets::KnownTool;
use crate::scorer::{ErgonomicMetrics, MetricsDelta, Scorer};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info};

/// Number of console lines kept for display.
pub const CONSOLE_CAPACITY: usize = 9;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsoleEntry {
    pub seq: u64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub project: String,
    pub params: ToolParameters,
    pub baseline: ToolParameters,
    pub metrics: ErgonomicMetrics,
    pub comparison: Option<MetricsDelta>,
    pub solver_running: bool,
    pub console: Vec<ConsoleEntry>,
}

struct SessionState {
    project: String,
    params: ToolParameters,
    baseline: ToolParameters,
    metrics: ErgonomicMetrics,
    baseline_metrics: ErgonomicMetrics,
    comparing: bool,
    console: VecDeque<ConsoleEntry>,
    next_seq: u64,
}

impl SessionState {
    fn log(&mut self, message: String) {
        debug!("console: {}", message);
        if self.console.len() == CONSOLE_CAPACITY {
            self.console.pop_front();
        }
        self.console.push_back(ConsoleEntry {
            seq: self.next_seq,
            message,
        });
        self.next_seq += 1;
    }
}

fn lock_state(state: &Mutex<SessionState>) -> ErgoResult<MutexGuard<'_, SessionState>> {
    state
        .lock()
        .map_err(|e| ErgoError::StatePoisoned(e.to_string()))
}

/// Writes each solver tick back into the session.
struct SessionProgress {
    scorer: Arc<Scorer>,
    state: Arc<Mutex<SessionState>>,
}

impl ProgressCallback for SessionProgress {
    fn on_tick(&self, _tick: usize, params: &ToolParameters) -> bool {
        let metrics = self.scorer.score(params);
        match self.state.lock() {
            Ok(mut s) => {
                s.params = *params;
                s.metrics = metrics;
                true
            }
            Err(_) => false,
        }
    }

    fn on_complete(&self, outcome: &SolverOutcome) {
        if let Ok(mut s) = self.state.lock() {
            let msg = if outcome.completed {
                format!(
                    "Optimization converged. Material set to {}.",
                    outcome.params.material.display_name()
                )
            } else {
                format!("Optimization interrupted after {} steps.", outcome.ticks_run)
            };
            s.log(msg);
        }
    }
}

/// Owner of one interactive analysis: the current tool, its baseline,
/// derived metrics, the console and at most one running solver.
pub struct ErgoSession {
    scorer: Arc<Scorer>,
    config: Config,
    bounds: ParameterBounds,
    state: Arc<Mutex<SessionState>>,
    solver: Mutex<Option<SolverHandle>>,
}

impl ErgoSession {
    pub fn new(config: Config) -> Self {
        let scorer = Arc::new(Scorer::new(config.weights.clone()));
        let params = KnownTool::Default.params();
        let metrics = scorer.score(&params);
        let state = SessionState {
            project: KnownTool::Default.project_name().to_string(),
            params,
            baseline: params,
            metrics,
            baseline_metrics: metrics,
            comparing: false,
            console: VecDeque::with_capacity(CONSOLE_CAPACITY),
            next_seq: 0,
        };
        Self {
            scorer,
            config,
            bounds: ParameterBounds::STANDARD,
            state: Arc::new(Mutex::new(state)),
            solver: Mutex::new(None),
        }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Applies `f` to the current parameters, clamps to the slider ranges and rescores.
    fn update<F>(&self, message: Option<String>, f: F) -> ErgoResult<ErgonomicMetrics>
    where
        F: FnOnce(&mut ToolParameters),
    {
        let mut s = lock_state(&self.state)?;
        let mut next = s.params;
        f(&mut next);
        s.params = self.bounds.clamp(next);
        s.metrics = self.scorer.score(&s.params);
        if let Some(msg) = message {
            s.log(msg);
        }
        Ok(s.metrics)
    }

    pub fn set_diameter(&self, mm: f32) -> ErgoResult<ErgonomicMetrics> {
        self.update(None, |p| p.diameter = mm)
    }

    pub fn set_curvature(&self, degrees: f32) -> ErgoResult<ErgonomicMetrics> {
        self.update(None, |p| p.curvature = degrees)
    }

    pub fn set_handle_length(&self, mm: f32) -> ErgoResult<ErgonomicMetrics> {
        self.update(None, |p| p.handle_length = mm)
    }

    pub fn set_grip_force(&self, newtons: f32) -> ErgoResult<ErgonomicMetrics> {
        self.update(None, |p| p.grip_force = newtons)
    }

    pub fn set_material(&self, material: Material) -> ErgoResult<ErgonomicMetrics> {
        self.update(
            Some(format!("Material changed to: {}", material.display_name())),
            |p| p.material = material,
        )
    }

    pub fn set_hand_size(&self, hand: HandSize) -> ErgoResult<ErgonomicMetrics> {
        self.update(
            Some(format!("Hand model set to Size: {}", hand.short_code())),
            |p| p.hand_size = hand,
        )
    }

    pub fn set_grip(&self, grip: Option<GripType>) -> ErgoResult<ErgonomicMetrics> {
        let label = grip.map_or("none".to_string(), |g| g.to_string());
        self.update(Some(format!("Grip type set to: {}", label)), |p| p.grip = grip)
    }

    /// Replaces both the working parameters and the comparison baseline.
    pub fn load_preset(&self, tool: KnownTool) -> ErgoResult<ErgonomicMetrics> {
        self.cancel_solver()?;
        let mut s = lock_state(&self.state)?;
        let params = self.bounds.clamp(tool.params());
        s.project = tool.project_name().to_string();
        s.params = params;
        s.baseline = params;
        s.metrics = self.scorer.score(&params);
        s.baseline_metrics = s.metrics;
        s.log(format!("Project {} loaded.", tool.project_name()));
        Ok(s.metrics)
    }

    pub fn set_comparing(&self, on: bool) -> ErgoResult<()> {
        let mut s = lock_state(&self.state)?;
        s.comparing = on;
        s.log(if on {
            "Comparison Mode: ON (Overlay)".to_string()
        } else {
            "Comparison Mode: OFF".to_string()
        });
        Ok(())
    }

    /// Current minus baseline, when comparison mode is on.
    pub fn comparison(&self) -> ErgoResult<Option<MetricsDelta>> {
        let s = lock_state(&self.state)?;
        Ok(s.comparing.then(|| s.metrics.delta_from(&s.baseline_metrics)))
    }

    pub fn params(&self) -> ErgoResult<ToolParameters> {
        Ok(lock_state(&self.state)?.params)
    }

    pub fn metrics(&self) -> ErgoResult<ErgonomicMetrics> {
        Ok(lock_state(&self.state)?.metrics)
    }

    /// Starts the solver from the current parameters. A run already in flight
    /// is cancelled and joined first, so only one ever writes to the session.
    pub fn run_solver(&self, strategy: Strategy) -> ErgoResult<()> {
        let mut slot = self
            .solver
            .lock()
            .map_err(|e| ErgoError::StatePoisoned(e.to_string()))?;

        if let Some(previous) = slot.take() {
            previous.cancel();
            let _ = previous.join();
        }

        let start = {
            let mut s = lock_state(&self.state)?;
            s.log(format!(
                "AI Solver: Optimizing for {}...",
                strategy.to_string().to_uppercase()
            ));
            s.params
        };

        let plan = SolverPlan::from_start(start, strategy, &self.config.weights, &self.config.solver);
        let tick = Duration::from_millis(self.config.solver.solver_tick_ms);
        info!(
            "Session solver: {} -> d={:.1} c={:.1}",
            strategy, plan.target.diameter, plan.target.curvature
        );

        let callback = SessionProgress {
            scorer: self.scorer.clone(),
            state: self.state.clone(),
        };
        *slot = Some(Solver::new(plan, tick).spawn(callback));
        Ok(())
    }

    pub fn solver_running(&self) -> ErgoResult<bool> {
        let slot = self
            .solver
            .lock()
            .map_err(|e| ErgoError::StatePoisoned(e.to_string()))?;
        Ok(slot.as_ref().is_some_and(|h| !h.is_finished()))
    }

    /// Blocks until the active run (if any) ends.
    pub fn wait_for_solver(&self) -> ErgoResult<Option<SolverOutcome>> {
        let handle = self
            .solver
            .lock()
            .map_err(|e| ErgoError::StatePoisoned(e.to_string()))?
            .take();
        Ok(handle.and_then(SolverHandle::join))
    }

    pub fn cancel_solver(&self) -> ErgoResult<Option<SolverOutcome>> {
        let handle = self
            .solver
            .lock()
            .map_err(|e| ErgoError::StatePoisoned(e.to_string()))?
            .take();
        Ok(handle.and_then(|h| {
            h.cancel();
            h.join()
        }))
    }

    pub fn snapshot(&self) -> ErgoResult<SessionSnapshot> {
        let solver_running = self.solver_running()?;
        let s = lock_state(&self.state)?;
        Ok(SessionSnapshot {
            project: s.project.clone(),
            params: s.params,
            baseline: s.baseline,
            metrics: s.metrics,
            comparison: s.comparing.then(|| s.metrics.delta_from(&s.baseline_metrics)),
            solver_running,
            console: s.console.iter().cloned().collect(),
        })
    }
}
