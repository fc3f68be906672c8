use crate::cli::{Args, EndpointCommand};
use crate::config::Config;
use crate::constants::DEFAULT_API_DOMAIN;
use crate::data_fetcher::api::create_http_client_with_timeout;
use crate::data_fetcher::{ApiResponse, Endpoint, fetch_endpoints};
use crate::display::{render_error, render_path, render_response};
use crate::error::AppError;
use crossterm::{execute, terminal::SetTitle};
use std::io::{Write, stdout};
use tracing::{info, warn};

const TERMINAL_TITLE: &str = "F1 Ergast";

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    Config::display().await?;

    Ok(())
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// `--config` without a value resets the API domain to the default.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_at_path(args, &Config::get_config_path()).await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Applies the config flags in `args` to the file at `path`.
///
/// Starts from the stored file, not from `Config::load()`, so `ERGAST_*`
/// environment overrides are never written back to disk.
pub async fn update_config_at_path(args: &Args, path: &str) -> Result<(), AppError> {
    let mut config = Config::load_stored(path).await.unwrap_or_else(|e| {
        warn!("Existing config could not be loaded, starting from defaults: {e}");
        Config::default()
    });

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = if new_domain.trim().is_empty() {
            DEFAULT_API_DOMAIN.to_string()
        } else {
            new_domain.trim().to_string()
        };
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(path).await
}

/// Handles --path-only: prints each resolved path with its response type.
///
/// Paths resolve for every endpoint, so unmapped endpoints are reported
/// inline rather than failing the command.
pub fn handle_path_only_command(command: &EndpointCommand) -> Result<(), AppError> {
    let mut out = stdout();
    for endpoint in command.endpoints() {
        let response_type = endpoint.response_type();
        render_path(&mut out, &endpoint, response_type.as_ref().copied())?;
    }
    Ok(())
}

/// Fetches every endpoint the command expands to and prints the results.
pub async fn handle_fetch_command(args: &Args, command: &EndpointCommand) -> Result<(), AppError> {
    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let endpoints = command.endpoints();

    info!("Fetching {} endpoint(s) from {}", endpoints.len(), config.api_domain);
    let results = fetch_endpoints(&client, &config, &endpoints).await;

    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    write_fetch_results(&mut stdout(), args.json, &endpoints, results)
}

/// Writes fetched results in order.
///
/// Every result is written, failures included. Returns the first failure so
/// the process exits non-zero when any endpoint failed.
pub fn write_fetch_results<W: Write>(
    out: &mut W,
    json: bool,
    endpoints: &[Endpoint],
    results: Vec<Result<ApiResponse, AppError>>,
) -> Result<(), AppError> {
    let mut first_error = None;

    for (endpoint, result) in endpoints.iter().zip(results) {
        match result {
            Ok(response) if json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            Ok(response) => render_response(out, endpoint, &response)?,
            Err(e) => {
                if e.is_unsupported_endpoint() {
                    warn!("Unsupported endpoint requested: {}", endpoint.name());
                }
                render_error(out, endpoint, &e)?;
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::env_vars;
    use crate::data_fetcher::{ResponseType, Season, decode_response};
    use clap::Parser;
    use serial_test::serial;
    use tempfile::tempdir;

    const SEASONS_BODY: &str = r#"{"MRData":{"series":"f1","url":"http://ergast.com/api/f1/seasons.json",
        "limit":"30","offset":"0","total":"1","SeasonTable":{"Seasons":[
        {"season":"1950","url":"http://en.wikipedia.org/wiki/1950_Formula_One_season"}]}}}"#;

    fn seasons_response() -> ApiResponse {
        decode_response(ResponseType::Seasons, SEASONS_BODY, "test").unwrap()
    }

    #[test]
    fn test_write_fetch_results_json() {
        let mut out = Vec::new();
        write_fetch_results(
            &mut out,
            true,
            &[Endpoint::Seasons],
            vec![Ok(seasons_response())],
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["MRData"]["SeasonTable"]["Seasons"][0]["season"], "1950");
    }

    #[test]
    fn test_write_fetch_results_reports_unsupported_endpoint() {
        let unmapped = Endpoint::Drivers(Some(Season::Year(2015)));
        let error = unmapped.response_type().unwrap_err();
        let mut out = Vec::new();

        let result = write_fetch_results(
            &mut out,
            false,
            &[unmapped, Endpoint::Seasons],
            vec![Err(error), Ok(seasons_response())],
        );

        assert!(matches!(
            result,
            Err(AppError::MissingTypeMapping { endpoint: "drivers" })
        ));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unsupported endpoint"));
        assert!(text.contains("/api/f1/seasons.json [Seasons]"));
    }

    #[tokio::test]
    #[serial]
    async fn test_config_update_does_not_persist_env_overrides() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let log_path = temp_dir.path().join("logs").join("f1.log");
        let log_path_str = log_path.to_string_lossy().to_string();

        unsafe {
            std::env::set_var(env_vars::API_DOMAIN, "http://localhost:9000");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "5");
        }

        let args =
            Args::try_parse_from(["f1_ergast", "--set-log-file", log_path_str.as_str()]).unwrap();
        let result = update_config_at_path(&args, &config_path_str).await;

        unsafe {
            std::env::remove_var(env_vars::API_DOMAIN);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }

        result.unwrap();
        let saved = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(saved.api_domain, DEFAULT_API_DOMAIN);
        assert_eq!(saved.http_timeout_seconds, Config::default().http_timeout_seconds);
        assert_eq!(saved.log_file_path, Some(log_path_str));
    }

    #[tokio::test]
    async fn test_config_update_keeps_stored_values() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let stored = Config {
            api_domain: "https://ergast.example.com".to_string(),
            log_file_path: Some(temp_dir.path().join("old.log").to_string_lossy().to_string()),
            http_timeout_seconds: 12,
        };
        stored.save_to_path(&config_path_str).await.unwrap();

        let args = Args::try_parse_from(["f1_ergast", "--clear-log-file"]).unwrap();
        update_config_at_path(&args, &config_path_str).await.unwrap();

        let saved = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(saved.api_domain, "https://ergast.example.com");
        assert_eq!(saved.http_timeout_seconds, 12);
        assert_eq!(saved.log_file_path, None);
    }
}
