use anyhow::Context;
use clap::{Parser, Subcommand};
use pitch_core::{
    render_record, CoreConfig, PgPitchStore, PitchError, PitchId, PitchRecord, PitchResult,
    PitchService, RenderOptions,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "pitch")]
#[command(about = "PitchSite landing page CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a pitch record stored as JSON
    Render {
        /// JSON file holding a pitch row, optionally with its idea under `ideas`
        file: PathBuf,
        /// Write the document here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Escape HTML in pitch fields
        #[arg(long)]
        escape_html: bool,
    },
    /// Fetch a pitch from the datastore (DATABASE_URL) and render it
    Fetch {
        /// Pitch identifier
        pitch_id: String,
        /// Write the document here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Reads a pitch record from a JSON file.
fn load_record(path: &Path) -> PitchResult<PitchRecord> {
    let contents = std::fs::read_to_string(path).map_err(PitchError::FileRead)?;
    serde_json::from_str(&contents).map_err(PitchError::Deserialization)
}

fn write_output(html: &str, output: Option<&Path>) -> PitchResult<()> {
    match output {
        Some(path) => std::fs::write(path, html).map_err(PitchError::FileWrite),
        None => {
            println!("{html}");
            Ok(())
        }
    }
}

async fn fetch(pitch_id: &str) -> PitchResult<String> {
    let id = PitchId::new(pitch_id).map_err(|_| PitchError::MissingPitchId)?;

    let cfg = CoreConfig::from_env()?;
    let store = PgPitchStore::connect(&cfg).await?;
    let service = PitchService::new(Arc::new(store), cfg.render_options());

    let record = service.fetch_record(&id).await?;
    Ok(render_record(&record, service.render_options()))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Render {
            file,
            output,
            escape_html,
        }) => {
            let record = load_record(&file)
                .with_context(|| format!("Error rendering pitch from {}", file.display()))?;
            let html = render_record(&record, RenderOptions { escape_html });
            write_output(&html, output.as_deref())
                .with_context(|| format!("Error writing rendered {}", file.display()))?;
            if let Some(path) = output {
                println!("Rendered {} to {}", file.display(), path.display());
            }
        }
        Some(Commands::Fetch { pitch_id, output }) => {
            fetch(&pitch_id)
                .await
                .and_then(|html| write_output(&html, output.as_deref()))
                .with_context(|| format!("Error fetching pitch {}", pitch_id))?;
            if let Some(path) = output {
                println!("Rendered pitch {} to {}", pitch_id, path.display());
            }
        }
        None => {
            println!("Use 'pitch --help' for commands");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    run(Cli::parse()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_arguments_parse() {
        let cli = Cli::try_parse_from(["pitch", "render", "nova.json", "-o", "out.html"]).unwrap();
        match cli.command {
            Some(Commands::Render {
                file,
                output,
                escape_html,
            }) => {
                assert_eq!(file, PathBuf::from("nova.json"));
                assert_eq!(output, Some(PathBuf::from("out.html")));
                assert!(!escape_html);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn load_and_render_record_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("nova.json");
        std::fs::write(
            &input,
            r#"{"id": "abc123", "startup_name": "Nova", "tagline": "", "pitch": "We build rockets", "language": "en", "ideas": null}"#,
        )
        .unwrap();

        let record = load_record(&input).unwrap();
        assert!(record.idea.is_none());

        let output = dir.path().join("nova.html");
        let html = render_record(&record, RenderOptions::default());
        write_output(&html, Some(&output)).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("<title>Nova - Innovative Solutions</title>"));
    }

    #[test]
    fn load_record_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_record(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PitchError::FileRead(_)));
    }

    #[tokio::test]
    async fn failed_render_is_returned_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let cli = Cli::try_parse_from(["pitch", "render", missing.to_str().unwrap()]).unwrap();

        let err = run(cli).await.unwrap_err();
        assert!(err.to_string().starts_with("Error rendering pitch from"));
        assert!(matches!(
            err.downcast_ref::<PitchError>(),
            Some(PitchError::FileRead(_))
        ));
    }

    #[tokio::test]
    async fn fetch_with_empty_identifier_fails() {
        let cli = Cli::try_parse_from(["pitch", "fetch", ""]).unwrap();
        let err = run(cli).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PitchError>(),
            Some(PitchError::MissingPitchId)
        ));
    }

    #[test]
    fn load_record_reports_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.json");
        std::fs::write(&input, "{ not json").unwrap();

        let err = load_record(&input).unwrap_err();
        assert!(matches!(err, PitchError::Deserialization(_)));
    }
}
