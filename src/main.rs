use clap::Parser;
use color_eyre::Result;
use novelsplit::app::App;
use novelsplit::args::Options;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Options::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    App::new(args).run(&mut out)
}
