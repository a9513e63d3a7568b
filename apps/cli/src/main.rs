use fintrack_cli::commands::{self, Command};
use fintrack_cli::config::Config;
use fintrack_cli::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(config.log_format);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}\n\n{}", e, commands::USAGE);
            std::process::exit(2);
        }
    };
    if command == Command::Help {
        println!("{}", commands::USAGE);
        return Ok(());
    }

    let state = build_state(&config)?;
    let output = commands::run(&command, &state).await?;
    println!("{}", output);
    Ok(())
}
