use super::style;
use crate::approvals::{ApprovalRow, ApprovalStatus};
use crate::error::{ErrorKind, MouError};
use crate::pipeline::{RenderedStage, StageLine};
use crate::service::Acknowledgement;

const RULE_WIDTH: usize = 50;

/// One stage as a titled card.
pub fn format_stage(stage: &RenderedStage) -> Vec<String> {
    let mut lines = vec![
        format!("◆ {}", style::header(&stage.title)),
        style::dim("─".repeat(RULE_WIDTH)),
    ];
    for line in &stage.lines {
        match line {
            StageLine::Text(text) => lines.extend(text.lines().map(|l| format!("  {l}"))),
            StageLine::Field { label, value } => {
                lines.push(format!("  {label}: {}", style::strong(value)));
            }
            StageLine::Item { key, text } => lines.push(format!(
                "  {} {} {text}",
                style::accent("›"),
                style::strong(format!("[{key}]"))
            )),
        }
    }
    lines
}

/// All stages, separated by a blank line. Empty when nothing rendered.
pub fn format_stages(stages: &[RenderedStage]) -> String {
    stages
        .iter()
        .map(|stage| format_stage(stage).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Table of approval rows; a trailing `*` marks an uncommitted edit.
pub fn format_approval_table(rows: &[ApprovalRow<'_>]) -> Vec<String> {
    let (name, email, role) = (
        t!("approvals.column.name"),
        t!("approvals.column.email"),
        t!("approvals.column.role"),
    );
    let name_width = column_width(rows.iter().map(|r| r.entry.name.as_str()), &name);
    let email_width = column_width(rows.iter().map(|r| r.entry.email.as_str()), &email);
    let role_width = column_width(rows.iter().map(|r| r.entry.role.as_str()), &role);

    let mut lines = vec![
        style::header(format!(
            "{name:<name_width$}  {email:<email_width$}  {role:<role_width$}  {}",
            t!("approvals.column.status"),
        )),
        style::dim("─".repeat(name_width + email_width + role_width + 16)),
    ];

    for row in rows {
        let status = if row.pending.is_some() {
            style::yellow(format!("{}*", row.displayed))
        } else {
            status_label(row.displayed)
        };
        lines.push(format!(
            "{:<name_width$}  {:<email_width$}  {:<role_width$}  {status}",
            row.entry.name, row.entry.email, row.entry.role,
        ));
    }
    lines
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, heading: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(heading.chars().count()))
        .max()
        .unwrap_or_default()
}

fn status_label(status: ApprovalStatus) -> String {
    match status {
        ApprovalStatus::Approved => style::success(status),
        ApprovalStatus::Rejected => style::failure(status),
        ApprovalStatus::Idle => style::dim(status),
    }
}

/// Single blocking notification line for a failed operation.
pub fn format_failure(err: &MouError) -> String {
    let prefix = match err.kind() {
        ErrorKind::Service => t!("notify.service_failure"),
        ErrorKind::Validation => t!("notify.validation_failure"),
        ErrorKind::Busy => t!("notify.busy"),
    };
    format!("{} {prefix}: {err}", style::failure("✗"))
}

/// Failed approval fetch, as one notification line.
pub fn format_unavailable(err: &MouError) -> String {
    format!(
        "{} {}: {err}",
        style::failure("✗"),
        t!("approvals.unavailable")
    )
}

pub fn format_acknowledgement(email: &str, status: ApprovalStatus, ack: &Acknowledgement) -> String {
    let detail = ack
        .message()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default();
    format!(
        "{} {}{detail}",
        style::success("✓"),
        t!("notify.submitted", email = email, status = status.to_string())
    )
}
