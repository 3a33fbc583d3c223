use clap::{Parser, Subcommand};
use clinic_core::{
    config::parse_date, constants::DEFAULT_LOG_DIRECTIVE, demo::run_demonstration,
    user::years_between, CoreConfig, MentalHealthIssue,
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Clinic domain model CLI")]
struct Cli {
    /// Reference date for ages and history entries (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference clinic scenario
    Demo {
        /// Print the resulting clinic as JSON instead of the transcript
        #[arg(long)]
        json: bool,
    },
    /// List diagnosis categories
    Issues,
    /// Compute an age from a birth date
    Age {
        /// Date of birth (YYYY-MM-DD)
        birth_date: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let today = match cli.today.as_deref() {
        Some(value) => Some(parse_date(value)?),
        None => None,
    };
    let cfg = Arc::new(CoreConfig::new(today));

    match cli.command {
        Some(Commands::Demo { json }) => match run_demonstration(cfg) {
            Ok(demo) if json => println!("{}", demo.clinic.render_json()?),
            Ok(demo) => {
                for line in demo.transcript {
                    println!("{}", line);
                }
            }
            Err(e) => eprintln!("Error running demonstration: {}", e),
        },
        Some(Commands::Issues) => {
            for issue in MentalHealthIssue::ALL {
                println!("{}: {}", issue.code(), issue.label());
            }
        }
        Some(Commands::Age { birth_date }) => match parse_date(&birth_date) {
            Ok(birth_date) => {
                let today = cfg.today();
                println!("Age on {}: {}", today, years_between(birth_date, today));
            }
            Err(e) => eprintln!("Error computing age: {}", e),
        },
        None => {
            println!("Use 'clinic --help' for commands");
        }
    }

    Ok(())
}
