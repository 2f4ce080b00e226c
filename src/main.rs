use anstyle::{AnsiColor, Color, Style};
use clap::builder::Styles;
use clap::{Parser, Subcommand};
use orstviz_core::{BenchArgs, RunArgs};

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a sorting algorithm step by step
    Run(RunArgs),

    /// Compare the work every algorithm does on the same array
    Bench(BenchArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.commands {
        Commands::Run(run_args) => run_args.run(),
        Commands::Bench(bench_args) => bench_args.run(),
    }
}

/// Help colours follow the bar shades: green for what is settled, yellow for what moves.
fn get_styles() -> Styles {
    let fg = |color: AnsiColor| Style::new().fg_color(Some(Color::Ansi(color)));

    Styles::styled()
        .usage(fg(AnsiColor::Green).bold().underline())
        .header(fg(AnsiColor::Green).bold())
        .literal(fg(AnsiColor::Yellow).bold())
        .invalid(fg(AnsiColor::Red).bold())
        .error(fg(AnsiColor::Red).bold())
        .valid(fg(AnsiColor::Cyan).bold().underline())
        .placeholder(fg(AnsiColor::Blue))
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn step_counts_start_at_one() {
    for flag in ["--cancel-after", "--pause-after"] {
        assert!(Cli::try_parse_from(["orstviz", "run", flag, "0"]).is_err());
        assert!(Cli::try_parse_from(["orstviz", "run", flag, "1"]).is_ok());
    }
}
