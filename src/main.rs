use clap::{CommandFactory, Parser};
use f1_ergast::cli::{Args, is_config_operation};
use f1_ergast::commands::{
    handle_config_update_command, handle_fetch_command, handle_list_config_command,
    handle_path_only_command,
};
use f1_ergast::error::AppError;
use f1_ergast::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Guard must live until exit so buffered log lines are flushed
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    let Some(command) = args.command.as_ref() else {
        Args::command().print_help()?;
        return Ok(());
    };

    if args.path_only {
        return handle_path_only_command(command);
    }

    handle_fetch_command(&args, command).await
}
