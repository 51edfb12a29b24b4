use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mouflow::mou::{date_floor, is_below_floor, parse_mou_date};
use mouflow::{ApprovalStatus, Config, SubmitPolicy};

/// `mouflow` - MoU drafting pipeline client and approval editor.
#[derive(Parser, Debug)]
#[command(name = "mouflow")]
#[command(version)]
#[command(about = "Draft MoUs through the generation service and review approvals.", long_about = None)]
pub struct Cli {
    /// Service root URL (overrides config for this run)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Submit the displayed status when no explicit selection was made
    #[arg(long, global = true)]
    pub accept_displayed: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an MoU draft and show every pipeline stage produced
    Generate {
        #[arg(long)]
        company_name: Option<String>,

        #[arg(long)]
        objective: Option<String>,

        #[arg(long)]
        scope: Option<String>,

        /// All, Internship, Research, or any other label
        #[arg(long)]
        partnership_type: Option<String>,

        /// MoU date, YYYY-MM-DD, today or later
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// Prompt for every field
        #[arg(short, long)]
        interactive: bool,
    },

    /// Inspect and edit recipient approvals
    Approvals {
        #[command(subcommand)]
        approvals_command: ApprovalCommands,
    },

    /// Show the effective configuration
    Status,
}

#[derive(Subcommand, Debug)]
pub enum ApprovalCommands {
    /// Fetch and print the approval list
    List,

    /// Select and submit statuses, e.g. `b@x.com=Rejected`
    Set {
        #[arg(required = true, value_parser = parse_assignment)]
        assignments: Vec<(String, ApprovalStatus)>,
    },

    /// Interactive review: select, submit, reload
    Review,
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.base_url {
            config.service.base_url.clone_from(url);
        }
        if self.accept_displayed {
            config.approvals.submit_policy = SubmitPolicy::AcceptDisplayedValue;
        }
        if self.verbose {
            config.observability.log_level = "debug".into();
        }
    }
}

pub fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    let date = parse_mou_date(value)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "date cannot be empty".to_string())?;
    let floor = date_floor();
    if is_below_floor(date, floor) {
        return Err(t!("generate.date_below_floor", floor = floor.to_string()).into_owned());
    }
    Ok(date)
}

pub fn parse_assignment(value: &str) -> Result<(String, ApprovalStatus), String> {
    let (email, status) = value
        .split_once('=')
        .ok_or_else(|| format!("expected EMAIL=STATUS, got {value:?}"))?;
    let email = email.trim();
    if email.is_empty() {
        return Err(format!("missing email in {value:?}"));
    }
    let status = ApprovalStatus::from_label(status).map_err(|e| e.to_string())?;
    Ok((email.to_string(), status))
}
