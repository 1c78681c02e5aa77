use std::error::Error;
use std::process;

use clap::{Arg, Command};
use duct::cmd;

type AnyResult<T> = Result<T, Box<dyn Error>>;
type StepFn = fn() -> AnyResult<()>;
type Step = (&'static str, StepFn);

const DEMO_TENANTS: &str = "demos/tenants.json";

fn cli() -> Command {
    Command::new("shade-scale-task")
        .about("Tasks for managing the shade-scale workspace")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("lint").about("Run rustfmt and clippy over the workspace"))
        .subcommand(Command::new("test").about("Run the workspace test suite"))
        .subcommand(
            Command::new("bench")
                .about("Run palette benchmarks")
                .arg(
                    Arg::new("no-run")
                        .long("no-run")
                        .action(clap::ArgAction::SetTrue)
                        .help("Compile benchmarks without running them"),
                ),
        )
        .subcommand(
            Command::new("demo")
                .about("Render the demo tenants file with theme-export")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["json", "css"])
                        .default_value("css"),
                ),
        )
        .subcommand(Command::new("all").about("Run lint, tests, benchmark compilation and the demo"))
}

fn main() {
    if let Err(error) = run() {
        eprintln!("xtask error: {error}");
        process::exit(1);
    }
}

fn run() -> AnyResult<()> {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("lint", _)) => run_lint(),
        Some(("test", _)) => run_tests(),
        Some(("bench", args)) => {
            if args.get_flag("no-run") {
                build_benches()
            } else {
                run_benches()
            }
        }
        Some(("demo", args)) => {
            let format = args
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("css");
            run_demo(format)
        }
        Some(("all", _)) => run_all(),
        _ => unreachable!(),
    }
}

fn run_lint() -> AnyResult<()> {
    println!("Running Rust lint...");
    run_cmd("cargo", &["fmt", "--all", "--check"])?;
    run_cmd(
        "cargo",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
    )
}

fn run_tests() -> AnyResult<()> {
    println!("Running Rust tests...");
    run_cmd("cargo", &["test", "--workspace"])
}

fn run_benches() -> AnyResult<()> {
    println!("Running palette benchmarks...");
    run_cmd("cargo", &["bench", "-p", "shade-scale"])
}

fn build_benches() -> AnyResult<()> {
    println!("Compiling palette benchmarks...");
    run_cmd("cargo", &["bench", "-p", "shade-scale", "--no-run"])
}

fn run_demo(format: &str) -> AnyResult<()> {
    run_cmd(
        "cargo",
        &[
            "run",
            "-q",
            "-p",
            "theme-export",
            "--",
            "--tenants",
            DEMO_TENANTS,
            "--format",
            format,
        ],
    )
}

fn run_demo_css() -> AnyResult<()> {
    run_demo("css")
}

fn run_all() -> AnyResult<()> {
    let mut errors = Vec::new();

    const STEPS: &[Step] = &[
        ("Lint", run_lint),
        ("Tests", run_tests),
        ("Benchmark build", build_benches),
        ("Demo render", run_demo_css),
    ];

    for (label, step) in STEPS {
        if let Err(error) = step() {
            eprintln!("{label} failed: {error}");
            errors.push(format!("{label}: {error}"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("One or more tasks failed:\n{}", errors.join("\n")).into())
    }
}

fn run_cmd(program: &str, args: &[&str]) -> AnyResult<()> {
    println!("> {} {}", program, args.join(" "));
    cmd(program, args).run()?;
    Ok(())
}
