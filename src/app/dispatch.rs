use anyhow::Result;
use mouflow::approvals::ApprovalEditor;
use mouflow::mou::{MouField, RequestBuilder};
use mouflow::ui::{style, view};
use mouflow::{Config, GenerationSession, HttpServiceClient, MouError, ServiceClient};
use std::process::ExitCode;
use tracing::{debug, info};

use crate::app::prompts::{self, ReviewAction};
use crate::app::status::render_status;
use crate::cli::{ApprovalCommands, Cli, Commands};

struct GenerateArgs {
    company_name: Option<String>,
    objective: Option<String>,
    scope: Option<String>,
    partnership_type: Option<String>,
    date: Option<chrono::NaiveDate>,
    interactive: bool,
}

fn build_request(args: GenerateArgs) -> Result<RequestBuilder> {
    let mut builder = RequestBuilder::new();
    let text_fields = [
        (MouField::CompanyName, args.company_name),
        (MouField::Objective, args.objective),
        (MouField::Scope, args.scope),
        (MouField::PartnershipType, args.partnership_type),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value {
            builder.set_field(field, value)?;
        }
    }
    if let Some(date) = args.date {
        builder.set_field(MouField::MouDate, date)?;
    }
    if args.interactive {
        prompts::fill_request(&mut builder)?;
    }
    Ok(builder)
}

async fn run_generate(config: &Config, args: GenerateArgs) -> Result<ExitCode> {
    let request = build_request(args)?.into_request();
    let client = HttpServiceClient::new(&config.service.base_url).map_err(MouError::from);
    let client = match client {
        Ok(client) => client,
        Err(err) => return Ok(report(&err)),
    };

    println!("{}", style::dim(t!("generate.generating")));
    let mut session = GenerationSession::default();
    match session.generate(&client, &request).await {
        Ok(_) => {
            let stages = session.rendered();
            if stages.is_empty() {
                println!("{}", style::dim(t!("generate.no_stages")));
            } else {
                println!("{}\n", style::header(t!("generate.title")));
                println!("{}", view::format_stages(&stages));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(report(&err)),
    }
}

fn report(err: &MouError) -> ExitCode {
    eprintln!("{}", view::format_failure(err));
    ExitCode::FAILURE
}

fn print_board(editor: &ApprovalEditor) {
    let rows = editor.rows();
    if rows.is_empty() {
        println!("{}", style::dim(t!("approvals.empty")));
        return;
    }
    for line in view::format_approval_table(&rows) {
        println!("{line}");
    }
    if editor.pending().is_some_and(|p| !p.is_empty()) {
        println!("\n{}", style::dim(t!("approvals.pending_hint")));
    }
}

/// Print the outcome of each submit. Returns whether all of them succeeded.
fn report_submissions(
    editor: &ApprovalEditor,
    results: &[(String, Result<mouflow::service::Acknowledgement, MouError>)],
) -> bool {
    let mut all_ok = true;
    for (email, outcome) in results {
        match outcome {
            Ok(ack) => {
                if let Some(status) = editor.displayed_status(email) {
                    println!("{}", view::format_acknowledgement(email, status, ack));
                }
            }
            Err(err) => {
                all_ok = false;
                eprintln!("{}", view::format_failure(err));
            }
        }
    }
    all_ok
}

async fn load_editor(config: &Config, client: &dyn ServiceClient) -> Result<ApprovalEditor, MouError> {
    let mut editor = ApprovalEditor::new(config.approvals.submit_policy);
    editor.load(client).await?;
    Ok(editor)
}

async fn run_approvals(config: &Config, command: ApprovalCommands) -> Result<ExitCode> {
    let client = match HttpServiceClient::new(&config.service.base_url) {
        Ok(client) => client,
        Err(err) => return Ok(report(&err.into())),
    };
    let mut editor = match load_editor(config, &client).await {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("{}", view::format_unavailable(&err));
            return Ok(ExitCode::FAILURE);
        }
    };

    match command {
        ApprovalCommands::List => {
            print_board(&editor);
            Ok(ExitCode::SUCCESS)
        }
        ApprovalCommands::Set { assignments } => {
            for (email, status) in &assignments {
                if let Err(err) = editor.select_status(email, *status) {
                    return Ok(report(&err.into()));
                }
            }
            let results = editor.submit_pending(&client).await;
            let all_ok = report_submissions(&editor, &results);
            Ok(if all_ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        ApprovalCommands::Review => {
            review_loop(&mut editor, &client).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn review_loop(editor: &mut ApprovalEditor, client: &dyn ServiceClient) -> Result<()> {
    loop {
        println!();
        print_board(editor);
        println!();

        match prompts::pick_action()? {
            ReviewAction::Select => {
                let Some(email) = prompts::pick_recipient(&editor.rows())? else {
                    continue;
                };
                let Some(displayed) = editor.displayed_status(&email) else {
                    continue;
                };
                if let Some(status) = prompts::pick_status(&email, displayed)? {
                    match editor.choose_status(&email, status) {
                        Ok(recorded) => debug!(email = %email, %status, recorded, "status picked"),
                        Err(err) => eprintln!("{}", view::format_failure(&err.into())),
                    }
                }
            }
            ReviewAction::Submit => {
                let Some(email) = prompts::pick_recipient(&editor.rows())? else {
                    continue;
                };
                let outcome = editor.submit(client, &email).await;
                report_submissions(editor, &[(email, outcome)]);
            }
            ReviewAction::SubmitAll => {
                let results = editor.submit_pending(client).await;
                report_submissions(editor, &results);
            }
            ReviewAction::Refresh => {
                if let Err(err) = editor.load(client).await {
                    eprintln!("{}", view::format_unavailable(&err));
                }
            }
            ReviewAction::Quit => return Ok(()),
        }
    }
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<ExitCode> {
    info!(base_url = %config.service.base_url, "dispatching command");
    match cli.command {
        Commands::Generate {
            company_name,
            objective,
            scope,
            partnership_type,
            date,
            interactive,
        } => {
            run_generate(
                &config,
                GenerateArgs {
                    company_name,
                    objective,
                    scope,
                    partnership_type,
                    date,
                    interactive,
                },
            )
            .await
        }
        Commands::Approvals { approvals_command } => {
            run_approvals(&config, approvals_command).await
        }
        Commands::Status => {
            println!("{}", render_status(&config));
            Ok(ExitCode::SUCCESS)
        }
    }
}
