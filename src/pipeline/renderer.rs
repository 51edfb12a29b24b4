use super::result::PipelineResult;
use super::stage::{Stage, StageDescriptor, StageLine};
use tracing::debug;

/// Standard stage order. Rendering never reorders by content.
pub const STANDARD_ORDER: [Stage; 5] = [
    Stage::Draft,
    Stage::Clauses,
    Stage::Emails,
    Stage::ApprovalSummary,
    Stage::Version,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStage {
    pub stage: Stage,
    pub title: String,
    pub lines: Vec<StageLine>,
}

/// Renders a [`PipelineResult`] through an ordered list of stage descriptors.
#[derive(Debug, Clone)]
pub struct PipelineRenderer {
    descriptors: Vec<StageDescriptor>,
}

impl Default for PipelineRenderer {
    fn default() -> Self {
        Self::standard()
    }
}

impl PipelineRenderer {
    /// The five built-in stages in [`STANDARD_ORDER`].
    pub fn standard() -> Self {
        STANDARD_ORDER
            .iter()
            .fold(Self::builder(), |builder, stage| {
                builder.stage(StageDescriptor::standard(*stage))
            })
            .build()
    }

    pub fn builder() -> PipelineRendererBuilder {
        PipelineRendererBuilder::default()
    }

    pub fn descriptors(&self) -> &[StageDescriptor] {
        &self.descriptors
    }

    /// Stages whose gate passes, in descriptor order.
    pub fn visible_stages(&self, result: &PipelineResult) -> Vec<Stage> {
        self.descriptors
            .iter()
            .filter(|d| (d.gate)(result))
            .map(|d| d.stage)
            .collect()
    }

    pub fn render(&self, result: &PipelineResult) -> Vec<RenderedStage> {
        let rendered: Vec<RenderedStage> = self
            .descriptors
            .iter()
            .filter(|d| (d.gate)(result))
            .map(|d| RenderedStage {
                stage: d.stage,
                title: (d.title)(),
                lines: (d.present)(result),
            })
            .collect();
        debug!(stages = rendered.len(), "rendered pipeline result");
        rendered
    }
}

#[derive(Debug, Default)]
pub struct PipelineRendererBuilder {
    descriptors: Vec<StageDescriptor>,
}

impl PipelineRendererBuilder {
    /// Append a stage. A stage already present is replaced in place.
    pub fn stage(mut self, descriptor: StageDescriptor) -> Self {
        if let Some(existing) = self
            .descriptors
            .iter_mut()
            .find(|d| d.stage == descriptor.stage)
        {
            *existing = descriptor;
        } else {
            self.descriptors.push(descriptor);
        }
        self
    }

    pub fn without(mut self, stage: Stage) -> Self {
        self.descriptors.retain(|d| d.stage != stage);
        self
    }

    pub fn build(self) -> PipelineRenderer {
        PipelineRenderer {
            descriptors: self.descriptors,
        }
    }
}
