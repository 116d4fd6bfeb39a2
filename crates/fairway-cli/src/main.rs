//! fairway - golf course reference data loader and fixture verifier.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fairway_core::{IngestStatus, AERIAL_CATALOG, COURSE_FIXTURES, TEE_BOX_FIXTURE};
use fairway_fixtures::verify_fixture_set;
use fairway_store::ingest::IngestOutcome;
use fairway_store::{generate_insert_files, run_catalog, RestStore, StoreConfig};

#[derive(Parser)]
#[command(name = "fairway")]
#[command(author, version, about = "Golf course reference data loader")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load catalog images into the remote store
    Ingest {
        /// Directory holding the catalog image files
        #[arg(long, default_value = "GUIDELINES/images")]
        images_dir: PathBuf,
    },

    /// Generate offline SQL insert files instead of writing to the store
    GenSql {
        /// Directory holding the catalog image files
        #[arg(long, default_value = "GUIDELINES/images")]
        images_dir: PathBuf,

        /// Directory to write the generated SQL files into
        #[arg(long, default_value = "GUIDELINES/database_insert")]
        output_dir: PathBuf,
    },

    /// Verify generated fixture files before they are applied
    Verify {
        /// Directory holding the fixture SQL files
        #[arg(long, default_value = "GUIDELINES/database_insert")]
        fixtures_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Console logging with env-filter; `LOG_FORMAT=json` switches to
/// structured output.
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fairway_cli=info,fairway_store=info,fairway_fixtures=info".into());
    let registry = tracing_subscriber::registry().with(env_filter);

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::debug!(log_format = %log_format, "Logging initialized");
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Ingest { images_dir } => {
            // Credentials are required before any work starts.
            let config = StoreConfig::from_env()?;
            let store = RestStore::new(&config)?;

            let outcome = run_catalog(&store, &images_dir, AERIAL_CATALOG).await?;
            print_ingest(&outcome);
            Ok(ExitCode::SUCCESS)
        }
        Commands::GenSql {
            images_dir,
            output_dir,
        } => {
            let generated = generate_insert_files(&images_dir, &output_dir, AERIAL_CATALOG).await?;
            for path in &generated.insert_files {
                println!("Generated {}", path.display());
            }
            for file in &generated.missing {
                println!("[MISSING] {file}");
            }
            println!("Verification query saved to {}", generated.verify_file.display());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Verify { fixtures_dir } => {
            let report = verify_fixture_set(&fixtures_dir, COURSE_FIXTURES, TEE_BOX_FIXTURE);
            let ok = print_verify(&report);
            Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

fn print_ingest(outcome: &IngestOutcome) {
    for report in &outcome.reports {
        let tag = match report.status {
            IngestStatus::Inserted => "[OK]",
            IngestStatus::Skipped => "[SKIP]",
            IngestStatus::Missing => "[MISSING]",
            IngestStatus::Failed => "[FAIL]",
        };
        match &report.detail {
            Some(detail) => println!("{tag} course {}: {} ({detail})", report.course_id, report.file),
            None => println!("{tag} course {}: {}", report.course_id, report.file),
        }
    }

    if !outcome.stored.is_empty() {
        println!("\nStored images: {}", outcome.stored.len());
        for image in &outcome.stored {
            println!(
                "  course {}: {} bytes - {}",
                image.course_id, image.file_size, image.title
            );
        }
    }

    println!("\nSummary: {}", outcome.summary);
}

fn print_verify(report: &fairway_fixtures::SetReport) -> bool {
    for file in &report.files {
        if file.is_ok() {
            match file.id_range {
                Some((min, max)) => println!(
                    "[OK] {}: par {}, ids {min}-{max}",
                    file.file, file.par_total
                ),
                None => println!("[OK] {}", file.file),
            }
        } else {
            for violation in &file.violations {
                println!("[!] {}: {violation}", file.file);
            }
        }
    }

    for violation in &report.cross_file {
        println!("[!] {violation}");
    }

    if report.tee_boxes.is_ok() {
        println!("[OK] {}: {} unique ids", report.tee_boxes.file, report.tee_boxes.id_count);
    } else {
        for violation in &report.tee_boxes.violations {
            println!("[!] {}: {violation}", report.tee_boxes.file);
        }
    }

    if report.is_ok() {
        println!("\nAll fixture checks passed");
        true
    } else {
        println!("\n{} violation(s) found", report.violation_count());
        false
    }
}
