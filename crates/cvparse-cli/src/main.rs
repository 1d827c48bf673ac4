use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cvparse_core::{NoopAnnotator, SkillVocabulary, WhitespaceAnnotator, config_file};
use cvparse_parsing::{ParsingConfigBuilder, ProfileExtractor};

mod output;

use output::ColorMode;

/// Resume Field Extractor - Pull structured profile data out of resume documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract a structured profile from a .pdf or .txt resume
    Extract {
        /// Path to the resume file
        file_path: PathBuf,

        /// Print the profile as JSON instead of a report
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Path to a CSV skills table (header row holds the terms)
        #[arg(long)]
        skills: Option<PathBuf>,

        /// Path to output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the section segmentation of a resume file
    Sections {
        /// Path to the resume file
        file_path: PathBuf,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            file_path,
            json,
            no_color,
            skills,
            output,
        } => extract(file_path, json, no_color, skills, output),
        Command::Sections {
            file_path,
            no_color,
        } => sections(file_path, no_color),
    }
}

fn extract(
    file_path: PathBuf,
    json: bool,
    no_color: bool,
    skills: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config_file = config_file::load_config();

    // Resolve configuration: CLI flags > env vars > config file > defaults
    let skills_path = skills
        .or_else(|| std::env::var("CVPARSE_SKILLS").ok().map(PathBuf::from))
        .or_else(|| {
            config_file
                .vocabulary
                .as_ref()
                .and_then(|v| v.skills_path.clone())
                .map(PathBuf::from)
        });

    let vocabulary = match skills_path {
        Some(path) => SkillVocabulary::from_csv_path(&path)?,
        None => SkillVocabulary::builtin(),
    };

    let mut builder = ParsingConfigBuilder::new();
    if let Some(parsing) = &config_file.parsing {
        if let Some(extra) = &parsing.extra_sections {
            for name in extra {
                builder = builder.add_section_name(name.clone());
            }
        }
        if let Some(pattern) = &parsing.date_range_pattern {
            builder = builder.date_range_regex(pattern);
        }
    }
    let parsing_config = builder.build()?;

    let document = cvparse_ingest::acquire(&file_path)?;
    tracing::debug!(path = %file_path.display(), chars = document.raw().len(), "document acquired");

    // No entity tagging model ships with the CLI; a whitespace tokenizer
    // supplies the token stream, so tagged-entity fields and the
    // proper-noun name fallback resolve to their absence states. Embedders
    // with real annotation services use the library API instead.
    let entities = NoopAnnotator;
    let linguistic = WhitespaceAnnotator;
    let extractor =
        ProfileExtractor::with_config(parsing_config, &entities, &linguistic, &vocabulary);
    let profile = extractor.extract(&document)?;

    let color_pref = config_file
        .display
        .as_ref()
        .and_then(|d| d.color)
        .unwrap_or(true);
    let use_color = !no_color && color_pref && output.is_none();
    let color = ColorMode(use_color);

    let mut writer: Box<dyn Write> = if let Some(ref output_path) = output {
        Box::new(std::fs::File::create(output_path)?)
    } else {
        Box::new(std::io::stdout())
    };

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&profile)?)?;
    } else {
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_path.display().to_string());
        output::print_profile(&mut writer, &file_name, &profile, color)?;
    }

    Ok(())
}

fn sections(file_path: PathBuf, no_color: bool) -> anyhow::Result<()> {
    let document = cvparse_ingest::acquire(&file_path)?;
    let sections = cvparse_parsing::section::segment(document.raw());

    let mut stdout = std::io::stdout();
    output::print_sections(&mut stdout, &sections, ColorMode(!no_color))?;
    Ok(())
}
