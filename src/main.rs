use std::io;
use std::process;

use rideshare::config::Config;
use rideshare::console::Console;
use rideshare::engine::Engine;
use rideshare::error::Error;

fn main() {
    if let Err(err) = run() {
        eprintln!("rideshare: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    init_logger();

    tracing::info!("starting with {:?}", config);

    let mut engine = Engine::new(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config.output);

    console.run(&mut engine)
}

fn init_logger() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match std::env::var("RIDESHARE_LOG") {
        Ok(env) => EnvFilter::new(env),
        _ => return,
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
