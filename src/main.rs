use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use vshell::parser::parse_command_line;
use vshell::session::DEFAULT_SESSION;
use vshell::{CommandResult, SessionManager, ShellConfig};

mod logging;

#[derive(Parser)]
#[command(name = "vshell")]
#[command(about = "A sandboxed shell over an in-memory filesystem")]
#[command(version)]
struct Cli {
    /// Run this command line instead of reading stdin (repeatable)
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,

    /// TOML configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Output results as JSON (output, exitCode, cwd)
    #[arg(long = "json")]
    json: bool,

    /// Session to run commands in
    #[arg(long = "session", default_value = DEFAULT_SESSION)]
    session: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ShellConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        },
        None => ShellConfig::default(),
    };
    logging::init(&config.log_level);

    let manager = SessionManager::new(config);

    if !cli.commands.is_empty() {
        let mut exit_code = 0;
        for line in &cli.commands {
            let result = manager.run(&cli.session, line).await;
            exit_code = result.exit_code;
            report(&cli, &manager, result).await;
        }
        std::process::exit(exit_code);
    }

    let interactive = io::stdin().is_terminal();
    let mut stdin = io::stdin().lock();
    let mut line = String::new();
    loop {
        if interactive {
            print!("{}", manager.prompt(&cli.session).await);
            let _ = io::stdout().flush();
        }

        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: cannot read stdin: {}", e);
                std::process::exit(1);
            }
        }

        let result = manager.run(&cli.session, &line).await;
        report(&cli, &manager, result).await;

        if parse_command_line(&line).is_some_and(|parsed| parsed.verb == "exit") {
            break;
        }
    }
}

async fn report(cli: &Cli, manager: &SessionManager, result: CommandResult) {
    if cli.json {
        let cwd = manager.current_path(&cli.session).await;
        println!(
            "{}",
            serde_json::json!({
                "output": result.text(),
                "exitCode": result.exit_code,
                "cwd": cwd,
            })
        );
        return;
    }

    if result.is_success() {
        if !result.stdout.is_empty() {
            println!("{}", result.stdout);
        }
    } else {
        eprintln!("{}", result.stderr);
    }
}
