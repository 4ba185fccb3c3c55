use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use textsplit_core::{Preset, TextSplitter, TrimPolicy};

/// Per-request character limit of the speech APIs chunks are usually fed to.
pub const DEFAULT_MAX_CHARS: usize = 4096;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub splitter: SplitterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SplitterConfig {
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default)]
    pub preset: Preset,
    /// Explicit separator list. Takes precedence over `preset`.
    #[serde(default)]
    pub separators: Option<Vec<String>>,
    #[serde(default)]
    pub trim: bool,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            preset: Preset::default(),
            separators: None,
            trim: false,
        }
    }
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Chunk text separated by the configured delimiter.
    #[default]
    Plain,
    /// A single JSON array of chunk records.
    Json,
    /// One JSON chunk record per line.
    Jsonl,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_delimiter() -> String {
    "\n---\n".to_string()
}

/// Settings given on the command line. Unset fields keep the file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub max_chars: Option<usize>,
    pub preset: Option<Preset>,
    /// Raw separators as typed; escapes are resolved by [`unescape_separator`].
    pub separators: Vec<String>,
    /// `Some(false)` switches off trimming turned on in the file.
    pub trim: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl SplitterConfig {
    /// Build a validated splitter. Bad values surface as an
    /// invalid-configuration error here, never during splitting.
    pub fn build(&self) -> Result<TextSplitter> {
        let splitter = TextSplitter::new(self.max_chars)
            .context("Invalid splitter settings")?
            .with_preset(self.preset)
            .with_trim(if self.trim {
                TrimPolicy::Trim
            } else {
                TrimPolicy::Preserve
            });

        match &self.separators {
            Some(separators) => splitter
                .with_separators(separators.iter().cloned())
                .context("Invalid splitter settings"),
            None => Ok(splitter),
        }
    }
}

impl Config {
    pub fn apply(&mut self, overrides: &Overrides) -> Result<()> {
        if let Some(max_chars) = overrides.max_chars {
            self.splitter.max_chars = max_chars;
        }
        if let Some(preset) = overrides.preset {
            self.splitter.preset = preset;
            self.splitter.separators = None;
        }
        if !overrides.separators.is_empty() {
            let separators = overrides
                .separators
                .iter()
                .map(|raw| unescape_separator(raw))
                .collect::<Result<Vec<_>>>()?;
            self.splitter.separators = Some(separators);
        }
        if let Some(trim) = overrides.trim {
            self.splitter.trim = trim;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    config.splitter.build()?;

    Ok(config)
}

/// Load the file if one was given, then layer the command-line overrides
/// on top and return the config with its validated splitter.
pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> Result<(Config, TextSplitter)> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    config.apply(overrides)?;
    let splitter = config.splitter.build()?;
    Ok((config, splitter))
}

/// Resolve `\n`, `\t`, `\r` and `\\` in a separator typed on the command line.
pub fn unescape_separator(raw: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => bail!("Unknown escape '\\{}' in separator {:?}", other, raw),
            None => bail!("Dangling '\\' at end of separator {:?}", raw),
        }
    }
    Ok(out)
}
