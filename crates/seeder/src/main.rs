mod cli;
mod spider;

// remote imports
use clap::Parser;
use cli::{Cli, TraceLevel};
use tracing::{subscriber, trace, Level};
use tracing_subscriber::FmtSubscriber;

////////////////////////////////////////////////////////////////////////////

// preprocess the trace level, and open the .env file
fn preprocess(trace_level: Level) -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(trace_level)
        .with_writer(std::io::stderr)
        .finish();
    subscriber::set_global_default(my_subscriber)?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // no trace level means tui; fetch failures still reach stderr as warnings & errors
    let tui = cli.trace.is_none();
    preprocess(match cli.trace.unwrap_or(TraceLevel::WARN) {
        TraceLevel::DEBUG => Level::DEBUG,
        TraceLevel::ERROR => Level::ERROR,
        TraceLevel::INFO => Level::INFO,
        TraceLevel::TRACE => Level::TRACE,
        TraceLevel::WARN => Level::WARN,
    })?;
    trace!("command line input recorded: {cli:?}");

    let written = spider::run(&cli, tui).await?;
    println!("Wrote {written} rows to {}", cli.out.display());

    Ok(())
}
