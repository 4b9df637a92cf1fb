use std::process::exit;

use anyhow::Result;
use colored::Colorize;
use human_panic::setup_panic;
use log::info;

use skin_invert::prelude::{
    OperationType, RunOutcome, WorkflowContext, format_message, get_log_file, get_matches,
    get_options, get_verbosity, init_logger, run, usage_lines,
};

fn main() -> Result<()> {
    setup_panic!();

    let matches = get_matches();

    let Some(options) = get_options(&matches) else {
        for line in usage_lines() {
            println!("{line}");
        }
        eprintln!("missing argument");
        exit(1);
    };

    init_logger(get_verbosity(&matches), get_log_file(&matches).as_deref())?;

    match run(&options)? {
        RunOutcome::SingleFile(text) => println!("{text}"),
        RunOutcome::Tree(context) => report(&context),
    }

    Ok(())
}

fn report(context: &WorkflowContext) {
    for operation in &context.planned_operations {
        let verb = match operation.operation_type {
            OperationType::CreateDirectory => "create",
            OperationType::Copy => "copy",
            OperationType::Invert => "invert",
        };
        info!(
            "would {verb} {} -> {}",
            operation.source.display(),
            operation.destination.display()
        );
    }

    let message = context.summary();
    let colored_message = message.green().to_string();
    info!("{}", format_message(&message, &colored_message));
}
