use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, ValueEnum};
use shade_scale::tokens::css_rule;
use shade_scale::{Palette, try_generate_palette};
use tracing::{info, warn};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "theme-export",
    author,
    version,
    about = "Expand tenant brand colors into shade palettes for the styling layer",
    long_about = None
)]
pub struct Cli {
    /// JSON file mapping tenant identifiers to base colors, e.g. {"acme": "#3b82f6"}
    #[arg(
        long,
        value_name = "TENANTS_FILE",
        conflicts_with = "color",
        required_unless_present = "color"
    )]
    pub tenants: Option<PathBuf>,

    /// A single base color to expand
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Prefix for generated CSS custom properties
    #[arg(long, default_value = "brand")]
    pub prefix: String,

    /// Destination file; the result is printed to stdout when omitted
    #[arg(long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Reject unparseable colors instead of substituting the neutral palette
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Css,
}

pub fn run(cli: Cli) -> Result<()> {
    let rendered = render(&cli)?;

    match &cli.output {
        Some(path) => {
            write_output(path, &rendered)?;
            info!(
                target: "theme_export",
                output = %path.display(),
                format = ?cli.format,
                "theme written"
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Produces the full JSON or CSS document for `cli` without touching stdout.
pub fn render(cli: &Cli) -> Result<String> {
    match (&cli.color, &cli.tenants) {
        (Some(color), _) => {
            let palette = expand("--color", color, cli.strict)?;
            match cli.format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&palette)? + "\n"),
                OutputFormat::Css => Ok(css_rule(":root", &cli.prefix, &palette)?),
            }
        }
        (None, Some(path)) => {
            let tenants = load_tenants(path)?;
            let mut palettes = BTreeMap::new();
            for (tenant, color) in &tenants {
                let palette = expand(&format!("tenant '{tenant}'"), color, cli.strict)?;
                palettes.insert(tenant.as_str(), palette);
            }

            info!(
                target: "theme_export",
                tenants = palettes.len(),
                fallbacks = palettes.values().filter(|p| p.is_fallback()).count(),
                "expanded tenant palettes"
            );

            match cli.format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&palettes)? + "\n"),
                OutputFormat::Css => render_tenant_css(&palettes, &cli.prefix),
            }
        }
        (None, None) => Err(anyhow!("either --color or --tenants is required")),
    }
}

fn expand(label: &str, color: &str, strict: bool) -> Result<Palette> {
    match try_generate_palette(color) {
        Ok(palette) => Ok(palette),
        Err(err) if strict => {
            Err(err).with_context(|| format!("{label} has an invalid base color '{color}'"))
        }
        Err(err) => {
            warn!(%err, color, "{label} has an invalid base color, using the fallback palette");
            Ok(Palette::fallback())
        }
    }
}

fn load_tenants(path: &Path) -> Result<BTreeMap<String, String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read tenants file '{}'", path.display()))?;
    let tenants: BTreeMap<String, String> = serde_json::from_str(&contents).with_context(|| {
        format!(
            "tenants file '{}' must be a JSON object of tenant ids to colors",
            path.display()
        )
    })?;

    if tenants.is_empty() {
        bail!("tenants file '{}' defines no tenants", path.display());
    }

    if let Some(tenant) = tenants.keys().find(|tenant| !is_valid_tenant_id(tenant)) {
        bail!("tenant id '{tenant}' cannot be used in a CSS selector");
    }

    Ok(tenants)
}

fn is_valid_tenant_id(tenant: &str) -> bool {
    !tenant.trim().is_empty()
        && !tenant
            .chars()
            .any(|ch| ch == '"' || ch == '\\' || ch.is_control())
}

fn render_tenant_css(palettes: &BTreeMap<&str, Palette>, prefix: &str) -> Result<String> {
    let mut out = String::new();
    for (tenant, palette) in palettes {
        let selector = format!("[data-tenant=\"{tenant}\"]");
        let rule = css_rule(&selector, prefix, palette)
            .with_context(|| format!("failed to render CSS for tenant '{tenant}'"))?;

        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&rule);
    }
    Ok(out)
}

fn write_output(path: &Path, rendered: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!(
                    "failed to create output parent directory '{}'",
                    parent.display()
                )
            })?;
        }
    }

    fs::write(path, rendered)
        .with_context(|| format!("failed to write theme to '{}'", path.display()))
}
