use super::result::PipelineResult;
use strum::{Display, EnumIter};

/// Named section of a generation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Stage {
    Draft,
    Clauses,
    Emails,
    ApprovalSummary,
    Version,
}

/// Decides whether a stage is shown. Must look only at the stage's own field.
pub type StageGate = fn(&PipelineResult) -> bool;

/// Turns the stage's fields into presentation lines.
pub type StagePresenter = fn(&PipelineResult) -> Vec<StageLine>;

/// Presentation-neutral content of a rendered stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageLine {
    /// Preformatted block, shown verbatim.
    Text(String),
    /// `label: value`, value emphasised.
    Field { label: String, value: String },
    /// Bullet with an emphasised `[key]` prefix.
    Item { key: String, text: String },
}

#[derive(Clone, Copy)]
pub struct StageDescriptor {
    pub stage: Stage,
    /// Card title, looked up in the message catalogue.
    pub title: fn() -> String,
    pub gate: StageGate,
    pub present: StagePresenter,
}

impl std::fmt::Debug for StageDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageDescriptor")
            .field("stage", &self.stage)
            .field("title", &(self.title)())
            .finish_non_exhaustive()
    }
}

impl StageDescriptor {
    /// Built-in descriptor for a stage.
    pub fn standard(stage: Stage) -> Self {
        match stage {
            Stage::Draft => Self {
                stage,
                title: || t!("stage.draft.title").into_owned(),
                gate: PipelineResult::has_draft,
                present: present_draft,
            },
            Stage::Clauses => Self {
                stage,
                title: || t!("stage.clauses.title").into_owned(),
                gate: PipelineResult::has_clauses,
                present: present_clauses,
            },
            Stage::Emails => Self {
                stage,
                title: || t!("stage.emails.title").into_owned(),
                gate: PipelineResult::has_emails,
                present: present_emails,
            },
            Stage::ApprovalSummary => Self {
                stage,
                title: || t!("stage.approval.title").into_owned(),
                gate: PipelineResult::has_approval_summary,
                present: present_approval_summary,
            },
            Stage::Version => Self {
                stage,
                title: || t!("stage.version.title").into_owned(),
                gate: PipelineResult::has_version,
                present: present_version,
            },
        }
    }
}

fn present_draft(result: &PipelineResult) -> Vec<StageLine> {
    vec![StageLine::Text(result.draft_text.clone().unwrap_or_default())]
}

fn present_clauses(result: &PipelineResult) -> Vec<StageLine> {
    result
        .retrieved_clauses
        .iter()
        .map(|clause| StageLine::Item {
            key: clause.clause_id.clone(),
            text: clause.text.clone(),
        })
        .collect()
}

fn present_emails(result: &PipelineResult) -> Vec<StageLine> {
    vec![StageLine::Field {
        label: t!("stage.emails.sent_to").into_owned(),
        value: result.emails_sent.join(", "),
    }]
}

fn present_approval_summary(result: &PipelineResult) -> Vec<StageLine> {
    let mut lines = Vec::with_capacity(result.approval_status.len() + 1);
    lines.push(StageLine::Field {
        label: t!("stage.approval.overall").into_owned(),
        value: result.overall_mou_status.clone().unwrap_or_default(),
    });
    lines.extend(
        result
            .approval_status
            .iter()
            .map(|(email, status)| StageLine::Field {
                label: email.clone(),
                value: status.clone(),
            }),
    );
    lines
}

fn present_version(result: &PipelineResult) -> Vec<StageLine> {
    vec![
        StageLine::Field {
            label: t!("stage.version.number").into_owned(),
            value: result.version_number.clone().unwrap_or_default(),
        },
        StageLine::Field {
            label: t!("stage.version.diff").into_owned(),
            value: result.version_diff.clone().unwrap_or_default(),
        },
    ]
}
