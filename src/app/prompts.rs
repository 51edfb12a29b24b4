use anyhow::Result;
use dialoguer::{Input, Select};
use mouflow::approvals::ApprovalRow;
use mouflow::mou::{MouField, PARTNERSHIP_TYPES, RequestBuilder, date_floor, is_below_floor, parse_mou_date};
use mouflow::ApprovalStatus;
use strum::IntoEnumIterator;

fn prompt_text(label: &str, initial: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(format!("  {label}"))
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Partnership values offered by the prompt, empty first, and the index of
/// `current`. A value outside [`PARTNERSHIP_TYPES`] is offered as-is.
fn partnership_choices(current: &str) -> (Vec<String>, usize) {
    let mut choices: Vec<String> = std::iter::once(String::new())
        .chain(PARTNERSHIP_TYPES.iter().map(ToString::to_string))
        .collect();
    let position = match choices.iter().position(|c| c == current) {
        Some(position) => position,
        None => {
            choices.push(current.to_string());
            choices.len() - 1
        }
    };
    (choices, position)
}

/// Ask for every request field, starting from whatever the builder holds.
pub fn fill_request(builder: &mut RequestBuilder) -> Result<()> {
    let current = builder.request().clone();

    let company = prompt_text(&t!("generate.prompt.company_name"), &current.company_name)?;
    builder.set_field(MouField::CompanyName, company)?;

    let objective = prompt_text(&t!("generate.prompt.objective"), &current.objective)?;
    builder.set_field(MouField::Objective, objective)?;

    let scope = prompt_text(&t!("generate.prompt.scope"), &current.scope)?;
    builder.set_field(MouField::Scope, scope)?;

    let (choices, default_type) = partnership_choices(&current.partnership_type);
    let labels: Vec<String> = choices
        .iter()
        .map(|choice| {
            if choice.is_empty() {
                t!("generate.prompt.no_partnership_type").into_owned()
            } else {
                choice.clone()
            }
        })
        .collect();
    let picked = Select::new()
        .with_prompt(format!("  {}", t!("generate.prompt.partnership_type")))
        .items(&labels)
        .default(default_type)
        .interact()?;
    builder.set_field(MouField::PartnershipType, choices[picked].clone())?;

    let floor = date_floor();
    let date: String = Input::new()
        .with_prompt(format!("  {}", t!("generate.prompt.mou_date")))
        .with_initial_text(
            current
                .mou_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
        )
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            match parse_mou_date(input) {
                Ok(Some(date)) if is_below_floor(date, floor) => Err(t!(
                    "generate.date_below_floor",
                    floor = floor.to_string()
                )
                .into_owned()),
                Ok(_) => Ok(()),
                Err(e) => Err(e.to_string()),
            }
        })
        .interact_text()?;
    builder.set_field(MouField::MouDate, date)?;

    Ok(())
}

pub fn pick_recipient(rows: &[ApprovalRow<'_>]) -> Result<Option<String>> {
    if rows.is_empty() {
        return Ok(None);
    }
    let items: Vec<String> = rows
        .iter()
        .map(|r| format!("{} <{}>  {}", r.entry.name, r.entry.email, r.displayed))
        .collect();
    let picked = Select::new()
        .with_prompt(format!("  {}", t!("approvals.pick_entry")))
        .items(&items)
        .default(0)
        .interact_opt()?;
    Ok(picked.map(|i| rows[i].entry.email.clone()))
}

/// Status selector, preselected on what the row currently displays.
pub fn pick_status(email: &str, displayed: ApprovalStatus) -> Result<Option<ApprovalStatus>> {
    let statuses: Vec<ApprovalStatus> = ApprovalStatus::iter().collect();
    let items: Vec<String> = statuses.iter().map(ToString::to_string).collect();
    let default = statuses.iter().position(|s| *s == displayed).unwrap_or(0);
    let picked = Select::new()
        .with_prompt(format!("  {}", t!("approvals.pick_status", email = email)))
        .items(&items)
        .default(default)
        .interact_opt()?;
    Ok(picked.map(|i| statuses[i]))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Select,
    Submit,
    SubmitAll,
    Refresh,
    Quit,
}

pub fn pick_action() -> Result<ReviewAction> {
    const ACTIONS: [ReviewAction; 5] = [
        ReviewAction::Select,
        ReviewAction::Submit,
        ReviewAction::SubmitAll,
        ReviewAction::Refresh,
        ReviewAction::Quit,
    ];
    let items = [
        t!("approvals.action.select"),
        t!("approvals.action.submit"),
        t!("approvals.action.submit_all"),
        t!("approvals.action.refresh"),
        t!("approvals.action.quit"),
    ];
    let picked = Select::new().items(&items).default(0).interact_opt()?;
    Ok(picked.map_or(ReviewAction::Quit, |i| ACTIONS[i]))
}
