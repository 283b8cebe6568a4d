// src/context.rs
//
// AppContext owns the runtime handles that are not part of the panel state:
// the pipeline worker and the native picker. FrameForgeApp holds one of these
// plus the Controller and the panel modules.

use frameforge_worker::PipelineWorker;

use crate::picker::RfdPicker;

pub struct AppContext {
    pub worker: PipelineWorker,
    pub picker: RfdPicker,
}

impl AppContext {
    pub fn new(worker: PipelineWorker) -> Self {
        Self { worker, picker: RfdPicker }
    }
}
