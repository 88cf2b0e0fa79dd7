use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use websketch::config::Config;
use websketch::export::SoftwareSurface;
use websketch::generate::{
    compose_preview_document, drawing_prompt, prompt_for_description, GenerateClient,
    GeneratedPage,
};
use websketch::session::{script, Session};

#[derive(Parser, Debug)]
#[command(name = "websketch")]
#[command(version, about = "Sketch-to-webpage canvas: replay, export, and generate")]
struct Cli {
    /// Replay a pointer-event script (JSON array of events)
    #[arg(long, value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Write the exported SVG document to this path
    #[arg(long, value_name = "FILE")]
    svg: Option<PathBuf>,

    /// Write the exported PNG snapshot to this path
    #[arg(long, value_name = "FILE")]
    png: Option<PathBuf>,

    /// Submit the exported drawing to the generation service
    #[arg(long, action = ArgAction::SetTrue)]
    generate: bool,

    /// Generate a page from a text description instead of a drawing
    #[arg(long, value_name = "TEXT")]
    prompt: Option<String>,

    /// Override the configured generation service base URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Write generated HTML to this path (composed preview goes to stdout otherwise)
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Write generated CSS to this path
    #[arg(long, value_name = "FILE")]
    css: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(endpoint) = &cli.endpoint {
        config.generator.base_url = endpoint.clone();
    }

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    if let Some(description) = &cli.prompt {
        // Free-text mode: no drawing involved.
        let client = build_client(&config)?;
        let page = client
            .from_prompt(&prompt_for_description(description))
            .await
            .context("generation from prompt failed")?;
        emit_page(&cli, &page)?;
        return Ok(());
    }

    let Some(script_path) = &cli.replay else {
        print_usage();
        return Ok(());
    };

    let events = script::load_script(script_path)?;
    let mut session = Session::new(&config);
    let mut surface = SoftwareSurface::new(*session.export_style());
    script::replay(&mut session, &events);
    if session.take_needs_redraw() {
        surface.update(session.drawing());
    }

    let export = session
        .export_drawing(&surface)
        .context("failed to export drawing")?;

    if let Some(path) = &cli.svg {
        fs::write(path, &export.vector)
            .with_context(|| format!("failed to write SVG to {}", path.display()))?;
        log::info!("Wrote {} ({} bytes)", path.display(), export.vector.len());
    }
    if let Some(path) = &cli.png {
        fs::write(path, &export.raster)
            .with_context(|| format!("failed to write PNG to {}", path.display()))?;
        log::info!("Wrote {} ({} bytes)", path.display(), export.raster.len());
    }

    if cli.generate {
        let client = build_client(&config)?;
        let page = client
            .from_drawing(&export.raster, drawing_prompt())
            .await
            .context("generation from drawing failed")?;
        emit_page(&cli, &page)?;
    } else if cli.svg.is_none() && cli.png.is_none() {
        // No outputs requested: print the vector document.
        println!("{}", export.vector);
    }

    Ok(())
}

fn build_client(config: &Config) -> Result<GenerateClient> {
    GenerateClient::new(
        &config.generator.base_url,
        Duration::from_secs(config.generator.timeout_secs),
    )
    .context("failed to construct generation client")
}

fn emit_page(cli: &Cli, page: &GeneratedPage) -> Result<()> {
    let mut wrote_file = false;
    if let Some(path) = &cli.html {
        fs::write(path, &page.html)
            .with_context(|| format!("failed to write HTML to {}", path.display()))?;
        log::info!("Wrote {}", path.display());
        wrote_file = true;
    }
    if let Some(path) = &cli.css {
        fs::write(path, &page.css)
            .with_context(|| format!("failed to write CSS to {}", path.display()))?;
        log::info!("Wrote {}", path.display());
        wrote_file = true;
    }
    if !wrote_file {
        print!("{}", compose_preview_document(&page.html, &page.css));
    }
    Ok(())
}

fn print_usage() {
    println!("websketch: sketch-to-webpage canvas");
    println!();
    println!("Usage:");
    println!("  websketch --replay sketch.json --svg out.svg --png out.png");
    println!("  websketch --replay sketch.json --generate --html page.html --css page.css");
    println!("  websketch --prompt \"a bakery landing page\"");
    println!("  websketch --print-config");
    println!();
    println!("Replay scripts are JSON arrays of pointer events:");
    println!("  [");
    println!("    {{ \"type\": \"tool\", \"tool\": \"pen\" }},");
    println!("    {{ \"type\": \"down\", \"x\": 10, \"y\": 10 }},");
    println!("    {{ \"type\": \"move\", \"x\": 20, \"y\": 10 }},");
    println!("    {{ \"type\": \"up\",   \"x\": 20, \"y\": 10 }}");
    println!("  ]");
    println!();
    println!("Tools: pen, line, rect, circle, eraser");
    println!("See websketch --help for all flags.");
}
