use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "rillc",
    about = "rill native driver: compile LLVM IR documents to executables",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile an IR document (.ll) to an object file or linked executable
    Build(BuildArgs),
    /// Build a temp executable and run it, propagating its exit code
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Input IR file (.ll)
    input: PathBuf,
    /// Output path (default: a.out, or the input stem with .o under -c)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
    /// Compile only to object (.o), do not link
    #[arg(short = 'c', long = "compile-only")]
    compile_only: bool,
    /// Optimization level passed to llc/clang (e.g. 0, 1, 2, 3)
    #[arg(short = 'O', value_name = "LEVEL")]
    opt: Option<String>,
    /// Extra args forwarded to clang at the link step
    #[arg(last = true)]
    extra: Vec<String>,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Input IR file (.ll)
    input: PathBuf,
    /// Optimization level (0..3)
    #[arg(short = 'O', value_name = "LEVEL")]
    opt: Option<String>,
    /// Program args to pass to the resulting executable
    #[arg(last = true)]
    prog_args: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Build(args) => cmd_build(&args),
        Commands::Run(args) => {
            let code = cmd_run(&args)?;
            std::process::exit(code);
        }
    }
}

fn resolve_llc_path() -> Result<PathBuf> {
    std::env::var("RILLC_LLC")
        .map(PathBuf::from)
        .ok()
        .or_else(|| which::which("llc-18").ok())
        .or_else(|| which::which("llc").ok())
        .ok_or_else(|| anyhow!("No llc-18 or llc found; please install llvm tools"))
}

fn resolve_clang_path() -> Result<PathBuf> {
    std::env::var("RILLC_CLANG")
        .map(PathBuf::from)
        .ok()
        .or_else(|| which::which("clang-18").ok())
        .or_else(|| which::which("clang").ok())
        .ok_or_else(|| anyhow!("No clang-18 or clang found; please install clang"))
}

fn run_checked(tool: &PathBuf, args: &[String]) -> Result<()> {
    let status = Command::new(tool)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("failed to spawn {}", tool.display()))?;
    if !status.success() {
        return Err(anyhow!("{} failed with status: {}", tool.display(), status));
    }
    Ok(())
}

fn input_stem(input: &PathBuf) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string())
}

fn cmd_build(args: &BuildArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(anyhow!("input file not found: {}", args.input.display()));
    }

    let stem = input_stem(&args.input);
    let want_obj = args.compile_only
        || args
            .output
            .as_ref()
            .map(|p| p.extension().map(|e| e == "o").unwrap_or(false))
            .unwrap_or(false);

    let out_path = if let Some(ref o) = args.output {
        o.clone()
    } else if want_obj {
        PathBuf::from(format!("{}.o", stem))
    } else {
        PathBuf::from("a.out")
    };

    let dir = tempfile::tempdir()?;
    let obj_path = if want_obj {
        out_path.clone()
    } else {
        dir.path().join(format!("{}.o", stem))
    };

    let llc = resolve_llc_path()?;
    let mut llc_args: Vec<String> = vec![
        args.input.display().to_string(),
        "-filetype=obj".to_string(),
        "-o".to_string(),
        obj_path.display().to_string(),
    ];
    if let Some(ref lvl) = args.opt {
        llc_args.push(format!("-O{}", lvl));
    }
    run_checked(&llc, &llc_args)?;

    if want_obj {
        return Ok(());
    }

    let clang = resolve_clang_path()?;
    let mut link_args: Vec<String> = vec![
        "-no-pie".to_string(),
        obj_path.display().to_string(),
        "-o".to_string(),
        out_path.display().to_string(),
    ];
    if let Some(ref lvl) = args.opt {
        link_args.push(format!("-O{}", lvl));
    }
    link_args.extend(args.extra.clone());
    run_checked(&clang, &link_args)
}

fn cmd_run(args: &RunArgs) -> Result<i32> {
    if !args.input.exists() {
        return Err(anyhow!("input file not found: {}", args.input.display()));
    }

    let stem = input_stem(&args.input);
    let dir = tempfile::tempdir()?;
    let obj_path = dir.path().join(format!("{}.o", stem));
    let exe_path = dir.path().join("a.out");

    let llc = resolve_llc_path()?;
    let mut llc_args: Vec<String> = vec![
        args.input.display().to_string(),
        "-filetype=obj".to_string(),
        "-o".to_string(),
        obj_path.display().to_string(),
    ];
    if let Some(ref lvl) = args.opt {
        llc_args.push(format!("-O{}", lvl));
    }
    run_checked(&llc, &llc_args)?;

    let clang = resolve_clang_path()?;
    let link_args: Vec<String> = vec![
        "-no-pie".to_string(),
        obj_path.display().to_string(),
        "-o".to_string(),
        exe_path.display().to_string(),
    ];
    run_checked(&clang, &link_args)?;

    let status = Command::new(&exe_path)
        .args(&args.prog_args)
        .status()
        .with_context(|| format!("failed to spawn {}", exe_path.display()))?;
    match status.code() {
        Some(code) => Ok(code),
        None => Err(anyhow!("program terminated by signal")),
    }
}
