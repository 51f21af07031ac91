use vf_sim::SimProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    LoadingConfig,
    Simulating,
    WritingReport,
    Completed,
}

impl RunStage {
    pub fn label(&self) -> &'static str {
        match self {
            RunStage::LoadingConfig => "loading",
            RunStage::Simulating => "simulating",
            RunStage::WritingReport => "writing",
            RunStage::Completed => "done",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StepProgress {
    pub step: usize,
    pub total_steps: usize,
    pub fraction_complete: f64,
    pub sim_time_s: f64,
}

impl From<SimProgress> for StepProgress {
    fn from(p: SimProgress) -> Self {
        Self {
            step: p.step,
            total_steps: p.total_steps,
            fraction_complete: p.fraction_complete,
            sim_time_s: p.sim_time_s,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunProgressEvent {
    pub stage: RunStage,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
    pub step: Option<StepProgress>,
}

impl RunProgressEvent {
    pub fn stage(stage: RunStage, elapsed_wall_s: f64, message: Option<String>) -> Self {
        Self {
            stage,
            elapsed_wall_s,
            message,
            step: None,
        }
    }
}
