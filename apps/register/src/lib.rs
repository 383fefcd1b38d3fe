//! # Tally Register Library
//!
//! Drives the cart widget over a line-oriented JSON channel: one request per
//! stdin line, one response per stdout line. Logs go to stderr.
//!
//! ## Module Organization
//! ```text
//! tally_register/
//! ├── lib.rs          ◄─── You are here (startup & serve loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Catalog file location & loading
//! │   ├── session.rs  ◄─── Cart controller owner
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Request type & dispatch
//! │   ├── entry.rs    ◄─── Entry form commands
//! │   ├── product.rs  ◄─── Product list
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── submit.rs   ◄─── Cart submission
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Wire Format
//! ```text
//! → {"command":"select_product","name":"Rice 1kg"}
//! ← {"ok":true,"data":{"form":{...},"breakdown":{...},"display":{...}}}
//! → {"command":"add_to_cart"}
//! ← {"ok":false,"error":{"code":"VALIDATION_ERROR","message":"..."}}
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::{BufRead, Write};

use tracing::{info, warn, Subscriber};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::{Request, Response};
use error::{ApiError, AppError};
use state::{ConfigState, SessionState};

/// Runs the register against stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Register Startup                                  │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • TALLY_* environment variables over defaults                       │
/// │     • Bad denomination/breakpoint stops startup                         │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • TALLY_CATALOG_PATH, else the platform data directory              │
/// │                                                                         │
/// │  4. Serve ────────────────────────────────────────────────────────────► │
/// │     • One command per line until stdin closes                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), AppError> {
    init_tracing();

    info!("Starting Tally register");

    let config = ConfigState::from_env()?;
    let rounding = config.rounding()?;

    let catalog_path = state::catalog::resolve_catalog_path(&config)?;
    info!(?catalog_path, "Catalog path determined");

    let catalog = state::catalog::load_catalog(&catalog_path)?;
    info!(products = catalog.len(), "Catalog loaded");

    let mut session = SessionState::new(catalog, rounding);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    serve(stdin.lock(), stdout.lock(), &mut session, &config)?;

    info!("Input closed, register stopping");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally_core=trace` - Narrow to one crate
/// - Default: INFO, DEBUG for tally crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally=debug"));

    build_subscriber(filter).init();
}

/// Stderr subscriber gated only by `filter`.
fn build_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

/// Reads requests from `input` until it closes, answering each on `output`.
///
/// Blank lines are skipped. A malformed line gets a `BAD_REQUEST` response
/// and serving continues.
pub fn serve<R, W>(
    input: R,
    mut output: W,
    session: &mut SessionState,
    config: &ConfigState,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(&line, session, config);
        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
    }
    Ok(())
}

/// Parses and runs a single request line.
pub fn handle_line(line: &str, session: &mut SessionState, config: &ConfigState) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Unreadable request");
            return Response::err(ApiError::bad_request(format!("Invalid request: {}", e)));
        }
    };

    let command = request.name();
    match commands::dispatch(session, config, request) {
        Ok(data) => Response::ok(data),
        Err(e) => {
            warn!(command, code = ?e.code, message = %e.message, "Command failed");
            Response::err(e)
        }
    }
}
