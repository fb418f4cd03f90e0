// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::time::Instant;

use policy_engine::config::{load_options, EngineOptions};
use policy_engine::demo::{Language, TranslatableItem, TranslationCatalog};
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--options <options.yaml>] <from> <to> <text>", program);
    eprintln!("Languages: en-US, en-GB, fr-CA");
    eprintln!("Example: {} en-US en-GB \"my favorite color\"", program);
    eprintln!("Example: {} --options configs/aggregate.yaml fr-CA en-US \"42 pommes\"", program);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("policy-engine");

    if let Err(e) = run(args.get(1..).unwrap_or_default()).await {
        eprintln!("❌ {:#}", e);
        print_usage(program);
        std::process::exit(1);
    }
}

async fn run(args: &[String]) -> anyhow::Result<()> {
    let (options, rest) = match args {
        [flag, path, rest @ ..] if flag == "--options" => (load_options(path)?, rest),
        _ => (EngineOptions::default(), args),
    };

    let [from, to, text] = rest else {
        anyhow::bail!("expected <from> <to> <text>, got {} argument(s)", rest.len());
    };

    let item = TranslatableItem::new(from.parse::<Language>()?, to.parse::<Language>()?, text.as_str());
    let engine = TranslationCatalog::new().aggregate_engine(options)?;

    println!("🚀 Policy Engine Translation Demo");
    println!("═══════════════════════════════════");
    println!("Engine: {} ({} strategy)", engine.name(), engine.strategy());
    println!("Request: {} -> {} \"{}\"", item.from, item.to, item.text);

    let start_time = Instant::now();
    engine.process(&item).await?;
    let duration = start_time.elapsed();

    let translations = item.translations()?;
    if translations.is_empty() {
        println!("\n⏭️  No engine accepted this request");
    } else {
        println!("\n🔄 Translations:");
        for (i, translation) in translations.iter().enumerate() {
            println!("  {}. {} → \"{}\"", i + 1, translation.translator, translation.text);
        }
    }

    for published in item.published()? {
        println!("📣 Published: \"{}\"", published);
    }
    for notification in item.notifications()? {
        println!("📧 {}", notification);
    }

    println!("\n⏱️  Processing Time: {:?}", duration);
    Ok(())
}
