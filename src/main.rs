use clap::Parser;
use std::process;

use taskledger::cli;
use taskledger::cli::commands::{Cli, Commands};
use taskledger::models::Approval;

fn main() {
    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    let exit_code = match cli_args.command {
        Commands::Init { total } => cli::init::run(total, json_output),
        Commands::Login { role, company, name } => {
            cli::login::run(role, &company, &name, json_output)
        }
        Commands::Submit {
            title,
            description,
            completion,
        } => cli::submit::run(&title, description.as_deref(), completion, json_output),
        Commands::Review {
            id,
            completion,
            comments,
        } => cli::review::run_review(&id, completion, comments.as_deref(), json_output),
        Commands::Approve { id } => cli::review::run_finalize(&id, Approval::Approved, json_output),
        Commands::Reject { id } => cli::review::run_finalize(&id, Approval::Rejected, json_output),
        Commands::List {
            pending_review,
            pending_approval,
            search,
        } => cli::list::run_list(pending_review, pending_approval, search.as_deref(), json_output),
        Commands::Show { id } => cli::list::run_show(&id, json_output),
        Commands::Status => cli::status::run_status(json_output),
        Commands::Export { out } => cli::export::run(out.as_deref(), json_output),
        Commands::Sentiment => cli::status::run_sentiment(json_output),
    };

    process::exit(exit_code);
}
