//! CLI command definitions and handlers

use clap::Subcommand;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::client::Translator;
use crate::core::config::TranslatorConfig;
use crate::core::languages::{self, check_language_code, is_valid_target};
use crate::core::models::OptionsUpdate;

/// Commands for the translator CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text given as arguments, a file (one text per line) or stdin
    Translate {
        /// Texts to translate
        text: Vec<String>,

        /// Source language code or name (default: auto)
        #[arg(long)]
        from: Option<String>,

        /// Target language code or name (default: es)
        #[arg(short, long)]
        to: Option<String>,

        /// Translate each non-empty line of this file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the translation log as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported languages
    Languages {
        /// Only show codes or names containing this text
        #[arg(long)]
        filter: Option<String>,
    },

    /// Resolve a language code or name
    Check {
        /// Code or name to check, e.g. "fr" or "French"
        value: String,
    },

    /// Start HTTP API server
    Server {
        /// Bind address (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

/// Build the configuration from file or environment, then apply CLI overrides
pub fn load_config(
    path: Option<&Path>,
    endpoint: Option<String>,
) -> anyhow::Result<TranslatorConfig> {
    let mut config = match path {
        Some(path) => TranslatorConfig::from_file(path)?,
        None => TranslatorConfig::from_env()?,
    };

    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }

    config.validate()?;
    Ok(config)
}

/// Resolve `--from`/`--to` into an options update, failing on unknown values
pub fn options_from_args(
    from: Option<String>,
    to: Option<String>,
) -> anyhow::Result<OptionsUpdate> {
    let mut update = OptionsUpdate::new();

    if let Some(from) = from {
        let code = check_language_code(&from)
            .ok_or_else(|| anyhow::anyhow!("Unknown source language: {}", from))?;
        update = update.with_input_language(code);
    }

    if let Some(to) = to {
        let code = check_language_code(&to)
            .filter(|code| is_valid_target(code))
            .ok_or_else(|| anyhow::anyhow!("Unknown target language: {}", to))?;
        update = update.with_output_language(code);
    }

    Ok(update)
}

/// Collect the texts to translate, in order of precedence: arguments, file, stdin
fn collect_texts(text: Vec<String>, file: Option<PathBuf>) -> anyhow::Result<Vec<String>> {
    if !text.is_empty() {
        return Ok(text);
    }

    if let Some(file) = file {
        let content = std::fs::read_to_string(&file)?;
        return Ok(non_empty_lines(&content));
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(vec![input.trim_end().to_string()])
}

fn non_empty_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Handle translate command
pub async fn handle_translate(
    config: TranslatorConfig,
    text: Vec<String>,
    from: Option<String>,
    to: Option<String>,
    file: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Instant;

    let start_time = Instant::now();

    let update = options_from_args(from, to)?;
    let translator = Translator::with_options(config, &update).await?;
    let texts = collect_texts(text, file)?;

    if texts.iter().all(|t| t.is_empty()) {
        anyhow::bail!("Provide valid source text");
    }

    info!("Translating {} text(s) ({})", texts.len(), translator.options().await);

    let pb = if texts.len() > 1 && !json {
        let pb = ProgressBar::new(texts.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut failed = 0;

    for text in &texts {
        match translator.translate(text, None).await {
            Ok(translation) => {
                debug!(
                    "Translated from {}",
                    translation.source_language_name().unwrap_or("unknown language")
                );
                if !json {
                    match &pb {
                        Some(pb) => pb.println(&translation.output_text),
                        None => println!("{}", translation.output_text),
                    }
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error translating {:?}: {}", text, e);
            }
        }

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Completed");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&translator.translations().await)?);
    }

    info!(
        "Completed: {} translated, {} failed in {:?}",
        translator.count().await,
        failed,
        start_time.elapsed()
    );

    if failed > 0 {
        anyhow::bail!("{} of {} translations failed", failed, texts.len());
    }

    Ok(())
}

/// Handle languages command
pub fn handle_languages(filter: Option<String>) -> anyhow::Result<()> {
    let filter = filter.map(|f| f.to_lowercase());

    for (code, name) in languages::languages() {
        let matches = match &filter {
            Some(f) => code.contains(f.as_str()) || name.to_lowercase().contains(f.as_str()),
            None => true,
        };

        if matches {
            println!("{:<8}{}", code, name);
        }
    }

    Ok(())
}

/// Handle check command
pub fn handle_check(value: String) -> anyhow::Result<()> {
    match check_language_code(&value) {
        Some(code) => {
            println!("{}\t{}", code, languages::language_name(code).unwrap_or_default());
            Ok(())
        }
        None => anyhow::bail!("Unknown language: {}", value),
    }
}

/// Handle server command
pub async fn handle_server(config: TranslatorConfig, host: String, port: u16) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    let translator = Translator::new(config)?;

    info!("Starting HTTP server on {}:{}", host, port);
    println!("🚀 Server starting on http://{}:{}", host, port);
    println!("   Upstream endpoint: {}", translator.endpoint());

    run_server(host, port, translator).await?;

    Ok(())
}
