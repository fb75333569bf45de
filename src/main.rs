// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::env;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use flowunit::config::load_and_validate_config;
use flowunit::processors::ProcessorFactory;
use flowunit::runner::FlowRunner;

/// One routed unit as it appears in the `--json` report.
#[derive(Serialize)]
struct UnitReport {
    relationship: String,
    penalized: bool,
    attributes: HashMap<String, String>,
    content: String,
    content_encoding: &'static str,
}

#[derive(Serialize)]
struct ProcessorReport {
    processor_id: String,
    processor: String,
    units: Vec<UnitReport>,
}

struct CliArgs {
    config: String,
    attributes: HashMap<String, String>,
    content: Vec<u8>,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut config = None;
    let mut attributes = HashMap::new();
    let mut content = Vec::new();
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--attr" => {
                let pair = iter
                    .next()
                    .ok_or_else(|| anyhow!("--attr expects name=value"))?;
                let (name, value) = pair
                    .split_once('=')
                    .ok_or_else(|| anyhow!("--attr expects name=value, got '{pair}'"))?;
                attributes.insert(name.to_string(), value.to_string());
            }
            "--content" => {
                let text = iter.next().ok_or_else(|| anyhow!("--content expects text"))?;
                content = text.clone().into_bytes();
            }
            "--json" => json = true,
            other if config.is_none() => config = Some(other.to_string()),
            other => return Err(anyhow!("unexpected argument '{other}'")),
        }
    }

    Ok(CliArgs {
        config: config.ok_or_else(|| anyhow!("missing config file"))?,
        attributes,
        content,
        json,
    })
}

fn usage(program: &str) {
    eprintln!("Usage: {program} <config.yaml> [--attr name=value ...] [--content text] [--json]");
    eprintln!("Example: {program} flows/fan-out.yaml --attr list_of_things=lions,tigers,bears --content \"some content\"");
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args[1..]) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("❌ {e}");
            usage(&args[0]);
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: CliArgs) -> Result<()> {
    let config = load_and_validate_config(&cli.config)
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("loading {}", cli.config))?;

    if !cli.json {
        println!("🚀 flowunit");
        println!("📋 Configuration: {}", cli.config);
        println!("🔢 Processors: {}", config.processors.len());
    }

    let mut reports = Vec::new();

    for processor_config in &config.processors {
        let processor = ProcessorFactory::create_processor(processor_config)?;
        let mut runner = FlowRunner::new(processor, processor_config.properties.clone())
            .map_err(|errors| {
                let joined: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                anyhow!("processor '{}': {}", processor_config.id, joined.join("; "))
            })?;

        runner.enqueue(cli.content.clone(), cli.attributes.clone());
        runner.run().await;

        if cli.json {
            reports.push(report_for(processor_config, &runner));
            continue;
        }

        println!();
        println!(
            "🔧 {} ({})",
            processor_config.id, processor_config.processor
        );
        for relationship in runner.processor().relationships() {
            println!(
                "   {}: {}",
                relationship.name,
                runner.transfer_count(*relationship)
            );
        }
        for transmission in runner.transmissions() {
            let mut attributes: Vec<(&String, &String)> =
                transmission.unit.attributes().iter().collect();
            attributes.sort();
            let rendered: Vec<String> = attributes
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            println!(
                "   → {} [{}]",
                transmission.relationship.name,
                rendered.join(", ")
            );
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

fn report_for(
    processor_config: &flowunit::config::ProcessorConfig,
    runner: &FlowRunner,
) -> ProcessorReport {
    let units = runner
        .transmissions()
        .iter()
        .map(|t| {
            let (content, content_encoding) = match std::str::from_utf8(t.unit.content()) {
                Ok(text) => (text.to_string(), "utf-8"),
                Err(_) => (BASE64.encode(t.unit.content()), "base64"),
            };
            UnitReport {
                relationship: t.relationship.name.to_string(),
                penalized: t.unit.is_penalized(),
                attributes: t.unit.attributes().clone(),
                content,
                content_encoding,
            }
        })
        .collect();

    ProcessorReport {
        processor_id: processor_config.id.clone(),
        processor: processor_config.processor.clone(),
        units,
    }
}
