use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lessonplan::config::{RunConfig, DEFAULT_DIR, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "lessonplan")]
#[command(about = "Create Modelica Playground lesson plans")]
#[command(
    long_about = "Create lesson plans for the Modelica Playground application found at http://playground.modelica.university"
)]
struct Cli {
    /// Directory that contains the lesson plan files
    #[arg(short, long, env = "LESSONPLAN_DIR", default_value = DEFAULT_DIR)]
    dir: String,

    /// Name of file to generate (`-` writes to stdout)
    #[arg(short, long, env = "LESSONPLAN_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: String,
}

/// Initialize tracing on stderr so stdout stays free for the document.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "lessonplan=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = RunConfig::new(&cli.dir, &cli.output);
    tracing::debug!(?config, "generating lesson plan");

    lessonplan::run(&config)?;
    Ok(())
}
