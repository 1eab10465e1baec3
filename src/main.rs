use std::io::{BufRead, IsTerminal};
use std::time::Duration;

use clap::Parser;
use kaustubh_os::commands::CommandResult;
use kaustubh_os::shell::{Shell, ShellOptions};
use kaustubh_os::terminal::{render_line, Submission};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kaustubh-os")]
#[command(about = "A portfolio that pretends to be an operating system")]
#[command(after_help = "Interactive keys: Ctrl+C cancels the line, Ctrl+D on an empty line exits.")]
#[command(version)]
struct Cli {
    /// Run a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Print results as JSON (lines, cwd, links) instead of text
    #[arg(long = "json")]
    json: bool,

    /// Pause after each boot-log character, in milliseconds
    #[arg(long = "boot-delay-ms", default_value_t = 40)]
    boot_delay_ms: u64,

    /// How long sudo "checks" the password, in milliseconds
    #[arg(long = "sudo-delay-ms", default_value_t = 1000)]
    sudo_delay_ms: u64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut shell = Shell::new(ShellOptions {
        boot_char_delay: Duration::from_millis(cli.boot_delay_ms),
        sudo_delay: Duration::from_millis(cli.sudo_delay_ms),
        ..Default::default()
    });

    // One-shot: -c, or lines piped on stdin
    if let Some(line) = cli.command.as_deref() {
        let submission = shell.run_line(line).await;
        print_submission(&submission, cli.json);
        return;
    }
    if !std::io::stdin().is_terminal() {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error: Cannot read stdin: {}", e);
                    std::process::exit(1);
                }
            };
            let submission = shell.run_line(&line).await;
            print_submission(&submission, cli.json);
        }
        return;
    }

    if let Err(e) = run_interactive(&mut shell).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_submission(submission: &Submission, json: bool) {
    let empty = CommandResult::empty();
    let result = match submission {
        Submission::Executed(result) => result,
        Submission::Empty | Submission::Clear => &empty,
    };

    if json {
        match serde_json::to_string(result) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Error: Cannot encode result: {}", e),
        }
        return;
    }

    if matches!(submission, Submission::Clear) && std::io::stdout().is_terminal() {
        print!("\x1b[H\x1b[2J\x1b[3J");
    }
    let colour = std::io::stdout().is_terminal();
    for line in &result.lines {
        if colour {
            println!("{}", render_line(line));
        } else {
            println!("{}", line.text);
        }
    }
    if let Some(ref links) = result.links {
        for uri in links {
            println!("{}", uri);
        }
    }
}

#[cfg(unix)]
async fn run_interactive(shell: &mut Shell) -> Result<(), kaustubh_os::RenderError> {
    use kaustubh_os::terminal::stdio::{RawMode, StdinKeys, StdoutLinks, StdoutRenderer};

    let raw = RawMode::enable()?;
    let mut out = StdoutRenderer::new();
    let mut links = StdoutLinks::new();
    let mut keys = StdinKeys::new();

    shell.boot(&mut out).await?;
    raw.discard_pending_input();
    keys.reset();

    while let Some(events) = keys.read()? {
        for event in events {
            // Ctrl+D on an empty line leaves the shell; otherwise it is ignored.
            if event.is_end_of_input() && shell.session().buffer().is_empty() {
                return Ok(());
            }
            shell.handle_key(event, &mut out, &mut links).await?;
        }
    }
    Ok(())
}

#[cfg(not(unix))]
async fn run_interactive(_shell: &mut Shell) -> Result<(), kaustubh_os::RenderError> {
    eprintln!("Error: Interactive mode needs a Unix terminal. Use -c 'command' or pipe commands via stdin.");
    std::process::exit(1);
}
