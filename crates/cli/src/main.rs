use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use facesort_core::catalog::infrastructure::http_image_catalog::HttpImageCatalog;
use facesort_core::jobs::infrastructure::http_job_client::HttpJobClient;
use facesort_core::orchestration::session::Session;
use facesort_core::orchestration::state::{OrchestrationState, Severity};
use facesort_core::shared::constants::IMAGE_EXTENSIONS;
use facesort_core::transfer::domain::image_uploader::ImagePayload;
use facesort_core::transfer::infrastructure::http_image_uploader::HttpImageUploader;

mod settings;
use settings::Settings;

/// Operator console for a remote face-classification service.
#[derive(Parser)]
#[command(name = "facesort")]
struct Cli {
    /// Server base URL (overrides the saved configuration).
    #[arg(long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show reference images, dataset images and the latest grouping.
    Status,

    /// Upload one photo of a known person to the reference collection.
    UploadReference {
        /// Image file to upload.
        file: PathBuf,
    },

    /// Upload one or more photos to the dataset as a single batch.
    UploadDataset {
        /// Image files to upload.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Run the classification job and show the refreshed grouping.
    Classify,

    /// Erase all reference, dataset and result data on the server.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Save connection settings for future invocations.
    Config {
        /// Server base URL to persist.
        #[arg(long)]
        server: String,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let Cli { server, command } = Cli::parse();
    let server = server.unwrap_or_else(|| Settings::load().server_url);

    match command {
        Command::Config { server } => {
            let path = Settings { server_url: server }.save()?;
            println!("Saved settings to {}", path.display());
        }
        Command::Status => {
            let mut session = connect(&server)?;
            session.hydrate()?;
            print_state(session.state());
        }
        Command::UploadReference { file } => {
            validate_image_files(std::slice::from_ref(&file))?;
            let image = ImagePayload::from_path(&file)?;
            let mut session = connect(&server)?;
            session.hydrate()?;
            session.begin_upload_reference(&image)?;
            report(&session);
            print_reference(session.state());
        }
        Command::UploadDataset { files } => {
            validate_image_files(&files)?;
            let images = files
                .iter()
                .map(|p| ImagePayload::from_path(p))
                .collect::<Result<Vec<_>, _>>()?;
            let mut session = connect(&server)?;
            session.hydrate()?;
            session.begin_upload_dataset(&images)?;
            report(&session);
            print_dataset(session.state());
        }
        Command::Classify => {
            let mut session = connect(&server)?;
            session.hydrate()?;
            session.begin_classify()?;
            report(&session);
            print_results(session.state());
        }
        Command::Reset { yes } => {
            if !yes && !confirm_reset()? {
                println!("Aborted.");
                return Ok(());
            }
            let mut session = connect(&server)?;
            session.begin_reset()?;
            report(&session);
        }
    }

    Ok(())
}

fn connect(server: &str) -> Result<Session, Box<dyn std::error::Error>> {
    log::debug!("using server {server}");
    Ok(Session::new(
        Box::new(HttpImageCatalog::new(server)),
        Box::new(HttpImageUploader::new(server)),
        Box::new(HttpJobClient::new(server)?),
        Box::new(HttpJobClient::new(server)?),
    ))
}

fn report(session: &Session) {
    if let Some(notice) = &session.state().notice {
        match notice.severity {
            Severity::Success => println!("OK: {}", notice.message),
            Severity::Error => eprintln!("Failed: {}", notice.message),
        }
    }
}

fn print_state(state: &OrchestrationState) {
    print_reference(state);
    print_dataset(state);
    print_results(state);
}

fn print_reference(state: &OrchestrationState) {
    println!("Reference images ({}):", state.reference.len());
    for image in &state.reference {
        println!("  {image}");
    }
}

fn print_dataset(state: &OrchestrationState) {
    println!("Dataset images ({}):", state.dataset.len());
    for image in &state.dataset {
        println!("  {image}");
    }
}

fn print_results(state: &OrchestrationState) {
    if state.results.is_empty() {
        println!("No classification results yet.");
        return;
    }
    println!("Results:");
    for (identity, images) in &state.results {
        println!("  {identity} ({} photo(s)):", images.len());
        for image in images {
            println!("    {image}");
        }
    }
}

fn confirm_reset() -> io::Result<bool> {
    print!("This permanently erases all server-side data. Type 'yes' to continue: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

fn validate_image_files(files: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    for file in files {
        if !file.exists() {
            return Err(format!("File not found: {}", file.display()).into());
        }
        if !is_image(file) {
            return Err(format!(
                "Not a supported image type: {} (expected one of: {})",
                file.display(),
                IMAGE_EXTENSIONS.join(", ")
            )
            .into());
        }
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
