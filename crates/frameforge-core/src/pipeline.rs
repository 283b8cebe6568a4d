// crates/frameforge-core/src/pipeline.rs
//
// Simulated processing pipeline. No frames are extracted, processed or
// encoded; a run only walks the stage sequence on fixed timers and announces
// each stage in the main log.
//
//   Idle ─500ms─▶ Extracting ─1s─▶ ProcessingFrames ─1s─▶ Reencoding ─1s─▶ Complete
//
// Runs cannot be cancelled or branched. Two runs started back to back are
// independent and their announcements interleave.

use std::time::Duration;

use uuid::Uuid;

use crate::form::Provider;
use crate::log::Severity;

pub type RunId = Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    Extracting,
    ProcessingFrames,
    Reencoding,
    Complete,
}

impl PipelineStage {
    /// The stage entered after this one, or `None` from `Complete`.
    pub fn next(self) -> Option<PipelineStage> {
        match self {
            PipelineStage::Idle             => Some(PipelineStage::Extracting),
            PipelineStage::Extracting       => Some(PipelineStage::ProcessingFrames),
            PipelineStage::ProcessingFrames => Some(PipelineStage::Reencoding),
            PipelineStage::Reencoding       => Some(PipelineStage::Complete),
            PipelineStage::Complete         => None,
        }
    }

    /// Log line written on entry. `Idle` is never entered by a transition.
    pub fn announcement(self) -> Option<&'static str> {
        match self {
            PipelineStage::Idle             => None,
            PipelineStage::Extracting       => Some("Extracting frames..."),
            PipelineStage::ProcessingFrames => Some("Processing frames..."),
            PipelineStage::Reencoding       => Some("Re-encoding video..."),
            PipelineStage::Complete         => Some("Process complete!"),
        }
    }

    pub fn severity(self) -> Severity {
        if self == PipelineStage::Complete { Severity::Success } else { Severity::Info }
    }

    pub fn is_terminal(self) -> bool {
        self == PipelineStage::Complete
    }
}

/// Dwell times between transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineTiming {
    /// Wait before leaving `Idle`.
    pub initial: Duration,
    /// Wait before every later transition.
    pub step:    Duration,
}

impl Default for PipelineTiming {
    fn default() -> Self {
        Self { initial: Duration::from_millis(500), step: Duration::from_millis(1000) }
    }
}

impl PipelineTiming {
    /// `(wait, stage)` pairs in order. Each wait is relative to the previous
    /// transition.
    pub fn schedule(&self) -> Vec<(Duration, PipelineStage)> {
        let mut out = Vec::with_capacity(4);
        let mut stage = PipelineStage::Idle;
        while let Some(next) = stage.next() {
            let wait = if stage == PipelineStage::Idle { self.initial } else { self.step };
            out.push((wait, next));
            stage = next;
        }
        out
    }

    /// Time from launch to `Complete`.
    pub fn total(&self) -> Duration {
        self.schedule().iter().map(|(d, _)| *d).sum()
    }
}

/// Form values captured when a run is launched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineRequest {
    pub input:    String,
    pub output:   String,
    pub provider: Provider,
    pub fps:      String,
    pub codec:    String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineEvent {
    pub run:   RunId,
    pub stage: PipelineStage,
}

/// Starts runs. frameforge-worker implements this with timer threads.
pub trait PipelineLauncher {
    fn launch(&mut self, request: PipelineRequest) -> RunId;
}
