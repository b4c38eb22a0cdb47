use anyhow::Result;
use clap::Parser;
use rayon::prelude::*;

use repo_persona::cli::{Cli, Commands};
use repo_persona::config::{Config, ConfigService};
use repo_persona::doctor;
use repo_persona::error::{ErrorCode, PersonaError};
use repo_persona::models::request::{Command, PersonaRequest};
use repo_persona::service::{AppService, ProfileOverrides, SplitInputPaths};
use repo_persona::session;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[cfg(not(feature = "dhat-heap"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        println!("{}", make_error_line(&e));
        std::process::exit(1);
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn classify_error(e: &anyhow::Error) -> (String, String) {
    if let Some(pe) = e.downcast_ref::<PersonaError>() {
        (pe.code.to_string(), pe.message.clone())
    } else {
        ("IO_ERROR".to_string(), e.to_string())
    }
}

fn serialize_output(value: &impl serde::Serialize, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

fn make_error_line(e: &anyhow::Error) -> String {
    let (code, message) = classify_error(e);
    let obj = serde_json::json!({ "error": { "code": code, "message": message } });
    obj.to_string()
}

fn print_output(value: &impl serde::Serialize, pretty: bool) -> Result<()> {
    let output = serialize_output(value, pretty)?;
    println!("{output}");
    Ok(())
}

/// Bundle list for `batch`: explicit list, list file, or directory scan.
fn resolve_paths(
    service: &AppService,
    paths: Option<&str>,
    paths_file: Option<&str>,
    dir: Option<&str>,
    glob: Option<&str>,
) -> Result<Vec<String>> {
    if let Some(ps) = paths {
        Ok(ps
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    } else if let Some(pf) = paths_file {
        let content = std::fs::read_to_string(pf)
            .map_err(|_| PersonaError::file_not_found(pf))?;
        Ok(content
            .lines()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    } else if let Some(d) = dir {
        service.collect_bundles(d, glob)
    } else {
        Err(PersonaError::new(
            ErrorCode::InvalidRequest,
            "One of --paths, --paths-file, or --dir is required",
        )
        .into())
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

fn run(cli: Cli) -> Result<()> {
    let pretty = cli.pretty;

    // Load configuration
    let config = ConfigService::load(cli.config.as_deref())?;

    // Initialize logging if debug mode (CLI flag or config)
    let _log_guard = if cli.debug || config.debug {
        Some(repo_persona::logger::init(&config)?)
    } else {
        None
    };

    // Handle early-exit commands before creating AppService
    if let Commands::Init { path } = &cli.command {
        let config_path = if let Some(p) = path {
            ConfigService::generate_at(p)?;
            p.clone()
        } else {
            ConfigService::generate_default()?;
            ConfigService::default_path()
        };
        eprintln!("Configuration file created at: {}", config_path.display());
        return Ok(());
    }

    match cli.command {
        Commands::Profile {
            input,
            owned,
            starred,
            profile,
            threshold,
            as_of,
        } => {
            let service = AppService::new().configure(&config)?;
            let bundle = match (input, owned) {
                (Some(path), _) => service.load_bundle(&path)?,
                (None, Some(owned)) => service.load_split(&SplitInputPaths {
                    owned: &owned,
                    starred: starred.as_deref(),
                    profile: profile.as_deref(),
                })?,
                (None, None) => {
                    return Err(PersonaError::new(
                        ErrorCode::InvalidRequest,
                        "One of --input or --owned is required",
                    )
                    .into());
                }
            };
            let result = service.compute_profile(bundle, &ProfileOverrides { threshold, as_of })?;
            print_output(&result, pretty)
        }
        Commands::Batch {
            paths,
            paths_file,
            dir,
            glob,
            threshold,
            as_of,
        } => {
            let service = AppService::new().configure(&config)?;
            let list = resolve_paths(
                &service,
                paths.as_deref(),
                paths_file.as_deref(),
                dir.as_deref(),
                glob.as_deref(),
            )?;
            batch_profiles(&service, &list, &ProfileOverrides { threshold, as_of })
        }
        Commands::Score { repo, all } => {
            let service = AppService::new().configure(&config)?;
            let record = service.load_repo(&repo)?;
            print_output(&service.score_repo(&record, all), pretty)
        }
        Commands::Taxonomy { group } => {
            let service = AppService::new().configure(&config)?;
            print_output(&service.list_taxonomy(group.as_deref())?, pretty)
        }
        Commands::Doctor => cmd_doctor(&config, pretty),
        Commands::Session => cmd_session(&config),
        Commands::Mcp => cmd_mcp(&config),
        Commands::Init { .. } => unreachable!("handled above"),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_doctor(config: &Config, pretty: bool) -> Result<()> {
    let service = AppService::new().configure(config)?;
    let report = doctor::run_doctor(service.taxonomy());
    print_output(&report, pretty)
}

fn cmd_session(config: &Config) -> Result<()> {
    let service = AppService::from_env().configure(config)?;
    session::run_session(|req| handle_request(&service, req))
}

fn cmd_mcp(config: &Config) -> Result<()> {
    use rmcp::ServiceExt;
    let cwd = std::env::current_dir()?;
    let service = AppService::sandboxed(cwd)?.configure(config)?;
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let server = repo_persona::mcp::PersonaServer::new(service);
        let transport = rmcp::transport::io::stdio();
        let running = server
            .serve(transport)
            .await
            .map_err(|e| anyhow::anyhow!("MCP server initialization failed: {e}"))?;
        running
            .waiting()
            .await
            .map_err(|e| anyhow::anyhow!("MCP server error: {e}"))?;
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Batch processing (NDJSON output, rayon parallel)
// ---------------------------------------------------------------------------

fn batch_profiles(
    service: &AppService,
    paths: &[String],
    overrides: &ProfileOverrides,
) -> Result<()> {
    let results: Vec<String> = paths
        .par_iter()
        .map(|p| match service.profile_from_file(p, overrides) {
            Ok(profile) => {
                serde_json::to_string(&profile).unwrap_or_else(|e| make_error_line(&e.into()))
            }
            Err(e) => make_error_line(&e),
        })
        .collect();

    for line in &results {
        println!("{line}");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Session handler
// ---------------------------------------------------------------------------

fn handle_request(service: &AppService, req: PersonaRequest) -> Result<serde_json::Value> {
    match req.command {
        Command::Profile => {
            let overrides = ProfileOverrides {
                threshold: req.threshold,
                as_of: req.as_of,
            };
            let result = match req.input {
                Some(input) => service.compute_profile(input, &overrides)?,
                None => service.profile_from_file(&req.path, &overrides)?,
            };
            Ok(serde_json::to_value(result)?)
        }
        Command::Score => {
            let repo = match req.repo {
                Some(repo) => repo,
                None => service.load_repo(&req.path)?,
            };
            Ok(serde_json::to_value(service.score_repo(&repo, req.all))?)
        }
        Command::Taxonomy => {
            let result = service.list_taxonomy(req.group.as_deref())?;
            Ok(serde_json::to_value(result)?)
        }
        Command::Doctor => {
            let report = doctor::run_doctor(service.taxonomy());
            Ok(serde_json::to_value(report)?)
        }
    }
}
