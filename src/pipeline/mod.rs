pub mod renderer;
pub mod result;
pub mod session;
pub mod stage;

pub use renderer::{PipelineRenderer, PipelineRendererBuilder, RenderedStage, STANDARD_ORDER};
pub use result::{Clause, PipelineResult};
pub use session::{GenerateTicket, GenerationSession};
pub use stage::{Stage, StageDescriptor, StageGate, StageLine, StagePresenter};
