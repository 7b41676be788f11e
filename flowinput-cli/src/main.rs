use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr, eyre};

use flowinput::domain::{BatchInput, InputEntity};
use flowinput::form::{Capabilities, InputFormContext, SettingsState, resolve_view};
use flowinput::io::{
    DocumentFormat, batch_inputs_from_value, capabilities_from_value, entity_from_value,
    parse_document_str,
};

#[derive(Debug, Parser)]
#[command(
    name = "flowinput",
    version,
    about = "Resolve the input-settings form view model for a flow's input entity"
)]
struct Cli {
    /// Input entity spec: file path, inline payload, or "-" for stdin
    #[arg(short = 'i', long = "input", value_name = "SPEC")]
    input: String,

    /// Batch-input collection spec: file path, inline payload, or "-" for stdin
    #[arg(short = 'b', long = "batch-inputs", value_name = "SPEC")]
    batch_inputs: Option<String>,

    /// Index of the selected batch input
    #[arg(long = "select", value_name = "INDEX")]
    select: Option<usize>,

    /// Capability document spec (defaults to everything enabled)
    #[arg(long = "capabilities", value_name = "SPEC")]
    capabilities: Option<String>,

    /// Start from the all-disabled capability set
    #[arg(long = "locked", conflicts_with = "capabilities")]
    locked: bool,

    /// Restrict the type catalog to local sources
    #[arg(long = "local-onebox")]
    local_onebox: bool,

    /// Show the normalization editor pane
    #[arg(long = "show-normalization")]
    show_normalization: bool,

    /// Render the in-flight fetch presentation instead of the editor
    #[arg(long = "fetching")]
    fetching: bool,

    /// Sampling duration in seconds shown next to Get Schema
    #[arg(long = "sampling-duration", value_name = "SECS", default_value = "60")]
    sampling_duration: String,

    /// Elapsed sampling ticks, counted down against the duration
    #[arg(long = "timer", value_name = "TICKS", default_value_t = 0)]
    timer: i64,

    /// Write the resolved view here instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite the output file even if it already exists
    #[arg(short = 'f', long = "force")]
    force: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let stdin_specs = count_stdin_specs(&[
        Some(cli.input.as_str()),
        cli.batch_inputs.as_deref(),
        cli.capabilities.as_deref(),
    ]);
    if stdin_specs > 1 {
        return Err(eyre!(
            "only one of --input/--batch-inputs/--capabilities may read from stdin"
        ));
    }

    let input: InputEntity = {
        let value = load_value(&cli.input, "input entity")?;
        entity_from_value(&value).map_err(|err| eyre!("input entity document rejected: {err:#}"))?
    };

    let batch_inputs: Vec<BatchInput> = match cli.batch_inputs.as_deref() {
        Some(spec) => {
            let value = load_value(spec, "batch inputs")?;
            batch_inputs_from_value(&value)
                .map_err(|err| eyre!("batch-input document rejected: {err:#}"))?
        }
        None => Vec::new(),
    };

    let capabilities = match cli.capabilities.as_deref() {
        Some(spec) => {
            let value = load_value(spec, "capabilities")?;
            capabilities_from_value(&value)
                .map_err(|err| eyre!("capability document rejected: {err:#}"))?
        }
        None if cli.locked => Capabilities::locked(),
        None => Capabilities::all_enabled(),
    };

    let mut settings = SettingsState::new();
    settings.set_show_normalization(cli.show_normalization);

    let view = resolve_view(&InputFormContext {
        input: &input,
        batch_inputs: &batch_inputs,
        selected_batch_input: cli.select,
        local_one_box: cli.local_onebox,
        capabilities: &capabilities,
        fetching_input_schema: cli.fetching,
        sampling_input_duration: &cli.sampling_duration,
        timer: cli.timer,
        settings: &settings,
    });

    let rendered = if cli.no_pretty {
        serde_json::to_string(&view).wrap_err("failed to serialize the resolved view")?
    } else {
        serde_json::to_string_pretty(&view).wrap_err("failed to serialize the resolved view")?
    };

    match cli.output {
        Some(path) => {
            if path.exists() && !cli.force {
                return Err(eyre!(
                    "file {} already exists (pass --force to overwrite)",
                    path.display()
                ));
            }
            fs::write(&path, rendered)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn count_stdin_specs(specs: &[Option<&str>]) -> usize {
    specs
        .iter()
        .filter(|spec| matches!(spec, Some("-")))
        .count()
}

/// Load a document spec: `-` reads stdin, an existing path reads the file,
/// anything else is treated as an inline payload.
fn load_value(spec: &str, label: &str) -> Result<serde_json::Value> {
    if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read from stdin")?;
        return parse_contents(&buffer, DocumentFormat::default(), label);
    }

    let path = PathBuf::from(spec);
    let format = probe_format_from_extension(&path)?.unwrap_or_default();
    match fs::read_to_string(&path) {
        Ok(contents) => parse_contents(&contents, format, label),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let inline_label = format!("inline {label}");
            parse_contents(spec, DocumentFormat::default(), &inline_label)
        }
        Err(err) => Err(Report::new(err)
            .wrap_err(format!("failed to load {label} from {}", path.display()))),
    }
}

fn parse_contents(contents: &str, format: DocumentFormat, label: &str) -> Result<serde_json::Value> {
    match parse_document_str(contents, format) {
        Ok(value) => Ok(value),
        Err(primary) => {
            for candidate in DocumentFormat::available_formats() {
                if candidate == format {
                    continue;
                }
                if let Ok(value) = parse_document_str(contents, candidate) {
                    return Ok(value);
                }
            }
            Err(eyre!("failed to parse {label} (first error: {primary:#})"))
        }
    }
}

fn probe_format_from_extension(path: &Path) -> Result<Option<DocumentFormat>> {
    let Some(ext) = path.extension() else {
        return Ok(None);
    };
    let normalized = ext.to_string_lossy().to_ascii_lowercase();
    match normalized.as_str() {
        "json" => Ok(Some(DocumentFormat::Json)),
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => Ok(Some(DocumentFormat::Yaml)),
        #[cfg(not(feature = "yaml"))]
        "yaml" | "yml" => Err(eyre!(
            "{} requires yaml support, but this build lacks the 'yaml' feature",
            path.display()
        )),
        #[cfg(feature = "toml")]
        "toml" => Ok(Some(DocumentFormat::Toml)),
        #[cfg(not(feature = "toml"))]
        "toml" => Err(eyre!(
            "{} requires toml support, but this build lacks the 'toml' feature",
            path.display()
        )),
        _ => Ok(None),
    }
}
