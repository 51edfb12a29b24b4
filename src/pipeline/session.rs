use super::renderer::{PipelineRenderer, RenderedStage};
use super::result::PipelineResult;
use crate::error::{MouError, ServiceError};
use crate::mou::MouRequest;
use crate::service::ServiceClient;
use tracing::{info, warn};

/// Owns the last committed generation result and the busy flag.
///
/// A call goes through three steps so the UI can keep running while it is
/// suspended: [`Self::begin`] marks the session busy, [`GenerateTicket::run`]
/// talks to the service without touching the session, and [`Self::complete`]
/// applies the outcome in one step.
#[derive(Debug, Default)]
pub struct GenerationSession {
    renderer: PipelineRenderer,
    current: Option<PipelineResult>,
    busy: bool,
}

/// An outstanding generation call. Holds its own copy of the request.
#[derive(Debug)]
#[must_use = "a ticket does nothing until it is run and completed"]
pub struct GenerateTicket {
    request: MouRequest,
}

impl GenerateTicket {
    pub fn request(&self) -> &MouRequest {
        &self.request
    }

    pub async fn run(self, client: &dyn ServiceClient) -> Result<PipelineResult, ServiceError> {
        client.generate(&self.request).await
    }
}

impl GenerationSession {
    pub fn new(renderer: PipelineRenderer) -> Self {
        Self {
            renderer,
            current: None,
            busy: false,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn current(&self) -> Option<&PipelineResult> {
        self.current.as_ref()
    }

    pub fn renderer(&self) -> &PipelineRenderer {
        &self.renderer
    }

    /// Stages of the committed result; empty before the first success.
    pub fn rendered(&self) -> Vec<RenderedStage> {
        self.current
            .as_ref()
            .map(|result| self.renderer.render(result))
            .unwrap_or_default()
    }

    pub fn begin(&mut self, request: &MouRequest) -> Result<GenerateTicket, MouError> {
        if self.busy {
            return Err(MouError::Busy);
        }
        self.busy = true;
        Ok(GenerateTicket {
            request: request.clone(),
        })
    }

    /// Clear the busy flag and, on success only, replace the committed result.
    pub fn complete(
        &mut self,
        outcome: Result<PipelineResult, ServiceError>,
    ) -> Result<&PipelineResult, MouError> {
        self.busy = false;
        match outcome {
            Ok(result) => {
                info!(
                    stages = self.renderer.visible_stages(&result).len(),
                    "generation result committed"
                );
                Ok(self.current.insert(result))
            }
            Err(err) => {
                warn!(error = %err, "generation failed; keeping previous result");
                Err(err.into())
            }
        }
    }

    pub async fn generate(
        &mut self,
        client: &dyn ServiceClient,
        request: &MouRequest,
    ) -> Result<&PipelineResult, MouError> {
        let ticket = self.begin(request)?;
        let outcome = ticket.run(client).await;
        self.complete(outcome)
    }
}
