use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_core::config::today_from_env_value;
use clinic_core::constants::{DEFAULT_LOG_DIRECTIVE, TODAY_ENV_VAR};
use clinic_core::demo::run_demonstration;
use clinic_core::CoreConfig;

/// Main entry point for the clinic demonstration
///
/// Builds the reference clinic (one psychiatrist, one patient, one appointment) and prints
/// each step of the scenario to stdout.
///
/// # Environment Variables
/// - `CLINIC_TODAY`: reference date for ages and history entries (default: local date)
/// - `RUST_LOG`: tracing filter, added to the default `clinic=info`
///
/// # Returns
/// * `Ok(())` - Once the transcript has been printed
/// * `Err(anyhow::Error)` - If logging cannot be installed or the scenario fails
///
/// A malformed `CLINIC_TODAY` is logged and ignored.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let today = match today_from_env_value(std::env::var(TODAY_ENV_VAR).ok()) {
        Ok(today) => today,
        Err(e) => {
            tracing::warn!("ignoring {}: {}", TODAY_ENV_VAR, e);
            None
        }
    };
    if let Some(today) = today {
        tracing::info!("++ Using pinned date {}", today);
    }
    let cfg = Arc::new(CoreConfig::new(today));

    let demo = run_demonstration(cfg)?;
    for line in &demo.transcript {
        println!("{}", line);
    }

    tracing::info!(
        "++ Clinic demonstration complete ({} appointment(s))",
        demo.clinic.appointment_count()
    );

    Ok(())
}
