// crates/frameforge-worker/src/worker.rs
//
// PipelineWorker: runs simulated pipeline timer chains off the UI thread.
//
// Each launch spawns one thread that sleeps through the stage schedule and
// sends a PipelineEvent per transition. Runs are fire-and-forget: there is no
// per-run cancel, and concurrent runs interleave on the shared channel. The
// UI drains `rx` once per frame.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};
use parking_lot::Mutex;
use uuid::Uuid;

use frameforge_core::pipeline::{
    PipelineEvent, PipelineLauncher, PipelineRequest, PipelineTiming, RunId,
};

pub struct PipelineWorker {
    /// Stage transitions from every run, in the order they fired.
    pub rx:   Receiver<PipelineEvent>,
    tx:       Sender<PipelineEvent>,
    timing:   PipelineTiming,
    /// Runs that have not yet reached Complete.
    active:   Arc<Mutex<HashSet<RunId>>>,
    /// Set on app exit so sleeping runs stop sending.
    shutdown: Arc<AtomicBool>,
}

impl Default for PipelineWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineWorker {
    pub fn new() -> Self {
        Self::with_timing(PipelineTiming::default())
    }

    pub fn with_timing(timing: PipelineTiming) -> Self {
        let (tx, rx) = bounded(256);
        Self {
            rx,
            tx,
            timing,
            active:   Arc::new(Mutex::new(HashSet::new())),
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn timing(&self) -> PipelineTiming {
        self.timing
    }

    /// Number of runs still walking their schedule.
    pub fn active_runs(&self) -> usize {
        self.active.lock().len()
    }

    pub fn is_busy(&self) -> bool {
        self.active_runs() > 0
    }

    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    fn spawn_run(&self, run: RunId) {
        let tx       = self.tx.clone();
        let active   = Arc::clone(&self.active);
        let shutdown = Arc::clone(&self.shutdown);
        let schedule = self.timing.schedule();

        active.lock().insert(run);

        let spawned = thread::Builder::new()
            .name(format!("pipeline-{run}"))
            .spawn(move || {
                for (wait, stage) in schedule {
                    thread::sleep(wait);
                    if shutdown.load(Ordering::Relaxed) {
                        break;
                    }
                    tracing::debug!(%run, ?stage, "pipeline stage");
                    if tx.send(PipelineEvent { run, stage }).is_err() {
                        // Receiver dropped: the app is gone.
                        break;
                    }
                }
                active.lock().remove(&run);
            });

        if let Err(e) = spawned {
            tracing::error!(%run, "could not start pipeline thread: {e}");
            self.active.lock().remove(&run);
        }
    }
}

impl PipelineLauncher for PipelineWorker {
    fn launch(&mut self, request: PipelineRequest) -> RunId {
        let run = Uuid::new_v4();
        tracing::debug!(%run, input = %request.input, "launching simulated run");
        self.spawn_run(run);
        run
    }
}
