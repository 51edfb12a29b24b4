use super::types::Acknowledgement;
use crate::approvals::{ApprovalEntry, ApprovalStatus};
use crate::error::ServiceError;
use crate::mou::MouRequest;
use crate::pipeline::PipelineResult;
use std::future::Future;
use std::pin::Pin;

/// A single suspended call to the service. Resolves exactly once.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'a>>;

/// Call boundary to the generation/approval service.
///
/// No retries, no timeouts, no cancellation: each call either resolves or
/// fails once.
pub trait ServiceClient: Send + Sync {
    fn generate<'a>(&'a self, request: &'a MouRequest) -> ServiceFuture<'a, PipelineResult>;

    fn list_approvals(&self) -> ServiceFuture<'_, Vec<ApprovalEntry>>;

    fn update_approval<'a>(
        &'a self,
        email: &'a str,
        status: ApprovalStatus,
    ) -> ServiceFuture<'a, Acknowledgement>;
}
