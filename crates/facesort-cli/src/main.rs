use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use facesort_engine::{
    list_people, sort_photos, Config, Destination, OnnxFaceEncoder, SortEvent, SortPaths,
};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser)]
#[command(
    name = "facesort",
    about = "Sort photos into per-person folders by face matching"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort photos from an input folder into per-person output folders
    Sort {
        /// The folder with photos to be filtered
        #[arg(long)]
        input_dir: PathBuf,
        /// The folder to put the filtered photos
        #[arg(long)]
        output_dir: PathBuf,
        /// The folder with one subfolder of reference photos per known person
        #[arg(long)]
        known_faces_dir: PathBuf,
        /// Print the full run report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the known people a reference directory defines
    People {
        /// The folder with one subfolder of reference photos per known person
        #[arg(long)]
        known_faces_dir: PathBuf,
    },
    /// Check that the ONNX model files are present
    Models,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sort {
            input_dir,
            output_dir,
            known_faces_dir,
            json,
        } => run_sort(input_dir, output_dir, known_faces_dir, json),
        Commands::People { known_faces_dir } => {
            for (name, images) in list_people(&known_faces_dir)? {
                println!("{name}: {images} reference image(s)");
            }
            Ok(())
        }
        Commands::Models => {
            let config = Config::from_env();
            println!("model directory: {}", config.model_dir.display());
            for path in [config.detector_model_path(), config.recognizer_model_path()] {
                let status = if path.exists() { "ok" } else { "MISSING" };
                println!("  {} — {}", path.display(), status);
            }
            Ok(())
        }
    }
}

fn run_sort(
    input_dir: PathBuf,
    output_dir: PathBuf,
    known_faces_dir: PathBuf,
    json: bool,
) -> Result<()> {
    let config = Config::from_env();
    let mut encoder = OnnxFaceEncoder::load(&config.model_dir)?;

    let paths = SortPaths {
        input_dir,
        output_dir: output_dir.clone(),
        known_faces_dir,
    };

    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    bar.set_message("sorting photos...");

    let report = sort_photos(
        &paths,
        &mut encoder,
        config.similarity_threshold,
        |event| match event {
            SortEvent::Routed {
                file_name,
                destination,
            } => match destination {
                Destination::Person(name) => bar.println(format!(
                    "'{file_name}' contains a known face ({name}) and has been copied to their folder"
                )),
                Destination::NoMatch => bar.println(format!(
                    "'{file_name}' does not contain a known face and has been copied to the 'no_match' folder"
                )),
            },
            SortEvent::Progress { processed, total } => {
                bar.set_length(total as u64);
                bar.set_position(processed as u64);
            }
        },
    )?;
    bar.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for person in &report.people {
        println!(
            "{}: {} matched photo(s) ({} reference encodings)",
            person.name, person.matched, person.references
        );
    }
    println!("no_match: {} photo(s)", report.no_match);
    println!(
        "Face sorting complete: {} photo(s) processed into {}",
        report.total_photos,
        output_dir.display()
    );
    Ok(())
}
