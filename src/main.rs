use pokemon_set_validator::{run, CliOptions, SetsSource};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- (--sets sets.json | --showdown team.txt) \
[--format gen7ou] [--output report.json]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut source = None;
    let mut format = None;
    let mut output_path = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sets" => {
                let path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--sets requires a path (e.g. --sets sets.json)")
                })?;
                source = Some(SetsSource::Json(path));
            }
            "--showdown" => {
                let path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--showdown requires a path (e.g. --showdown team.txt)")
                })?;
                source = Some(SetsSource::Showdown(path));
            }
            "--format" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--format requires a format id (e.g. gen7ou)"))?;
                format = Some(val);
            }
            "--output" => {
                output_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output report.json)")
                })?);
            }
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    let source = source.ok_or_else(|| anyhow::anyhow!("One of --sets or --showdown is required"))?;
    Ok(CliOptions {
        source,
        format,
        output_path,
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokemon_set_validator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let opts = parse_args()?;
    let report = run(&opts)?;
    if !report.all_legal() {
        std::process::exit(1);
    }
    Ok(())
}
