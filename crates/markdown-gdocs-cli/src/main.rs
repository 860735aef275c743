use anyhow::{Context, Result};
use markdown_gdocs_config::Config;
use markdown_gdocs_engine::{DocumentPlan, RequestGenerator, convert};
use std::{env, fs, path::PathBuf, process};

struct Args {
    input: PathBuf,
    plain_text: bool,
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut input = None;
    let mut plain_text = false;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--plain-text" => plain_text = true,
            flag if flag.starts_with("--") => return None,
            path if input.is_none() => input = Some(PathBuf::from(path)),
            _ => return None,
        }
    }

    Some(Args {
        input: input?,
        plain_text,
    })
}

fn run(args: &Args, config: &Config) -> Result<String> {
    let markdown = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let result = convert(&markdown)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    if args.plain_text {
        return Ok(result.plain_text);
    }

    let generator = RequestGenerator::new(config.styles.clone());
    let plan = DocumentPlan::new(&result, &generator)
        .with_context(|| format!("Failed to generate requests for {}", args.input.display()))?;
    log::info!(
        "{}: {} requests",
        args.input.display(),
        plan.requests.len() + 1
    );

    let batch = plan.batch();
    let json = if config.pretty {
        serde_json::to_string_pretty(&batch)
    } else {
        serde_json::to_string(&batch)
    }
    .context("Failed to serialize requests")?;
    Ok(json)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let Some(parsed) = parse_args(&args) else {
        let program = args.first().map_or("markdown-gdocs", String::as_str);
        eprintln!("Usage: {program} <file.md> [--plain-text]");
        process::exit(1);
    };

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    log::debug!("Config path: {}", Config::config_path().display());

    match run(&parsed, &config) {
        Ok(output) if parsed.plain_text => print!("{output}"),
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
