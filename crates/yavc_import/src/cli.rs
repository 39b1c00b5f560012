use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use yavc_core::yavc::{ImportOptions, SceneFormat};

pub const USAGE: &str = "\
Usage: yavc_import <file.yavc> [options]

Options:
  --format <auto|json|lines>   Scene file format (default: auto)
  --namespace <name>           Metadata key prefix (default: yavc)
  --config <options.json>      Load import options from a JSON file
  --plan                       Print creation requests as JSON instead of importing
  -h, --help                   Show this message";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub format: Option<SceneFormat>,
    pub namespace: Option<String>,
    pub plan_only: bool,
    pub help: bool,
}

impl CliArgs {
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = CliArgs::default();
        let mut input = None;
        let mut iter = args.into_iter();
        let _ = iter.next(); // program name

        while let Some(raw) = iter.next() {
            let arg = raw.as_ref();
            match arg {
                "-h" | "--help" => parsed.help = true,
                "--plan" => parsed.plan_only = true,
                "--format" | "--namespace" | "--config" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| anyhow!("Expected a value after '{arg}'"))?
                        .as_ref()
                        .to_string();
                    match arg {
                        "--format" => parsed.format = Some(value.parse()?),
                        "--namespace" => parsed.namespace = Some(value),
                        _ => parsed.config = Some(PathBuf::from(value)),
                    }
                }
                flag if flag.starts_with('-') => bail!("Unknown flag '{flag}'.\n\n{USAGE}"),
                path => {
                    if input.is_some() {
                        bail!("Unexpected argument '{path}'. Only one input file is supported.");
                    }
                    input = Some(PathBuf::from(path));
                }
            }
        }

        if parsed.help {
            return Ok(parsed);
        }
        parsed.input = input.ok_or_else(|| anyhow!("Missing input file.\n\n{USAGE}"))?;
        Ok(parsed)
    }

    /// Resolve import options: config file first, then flag overrides.
    pub fn import_options(&self) -> Result<ImportOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Reading config {}", path.display()))?;
                ImportOptions::from_json_str(&content)
                    .with_context(|| format!("Parsing config {}", path.display()))?
            }
            None => ImportOptions::default(),
        };

        if let Some(format) = self.format {
            options.format = format;
        }
        if let Some(namespace) = &self.namespace {
            options.namespace = namespace.clone();
        }
        Ok(options)
    }
}
