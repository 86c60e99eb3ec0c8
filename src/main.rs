//! Headless track designer.
//!
//! Stamps a template (optionally with a custom width), saves it under a name
//! and prints the resulting track as JSON.
//!
//! ```text
//! pitlane --name "Monza Clone" [--template oval|figure8|monaco] [--width 10..50]
//!         [--config designer.toml] [--out track.png]
//! ```

use anyhow::{anyhow, bail, Context};
use pitlane::{init_logging, DesignerConfig, RaceConfigurator, TemplateShape, BUILD_DATE, VERSION};
use pitlane_designer::png_bytes_from_data_url;
use std::path::PathBuf;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    template: Option<TemplateShape>,
    width: Option<u32>,
    name: Option<String>,
    out: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = || iter.next().ok_or_else(|| anyhow!("{flag} needs a value"));
        match flag.as_str() {
            "--config" => args.config = Some(PathBuf::from(value()?)),
            "--template" => {
                let raw = value()?;
                let shape = TemplateShape::parse(&raw)
                    .ok_or_else(|| anyhow!("unknown template '{raw}'"))?;
                args.template = Some(shape);
            }
            "--width" => args.width = Some(value()?.parse().context("--width expects a number")?),
            "--name" => args.name = Some(value()?),
            "--out" => args.out = Some(PathBuf::from(value()?)),
            "--version" => {
                println!("pitlane {VERSION} (built {BUILD_DATE})");
                return Ok(None);
            }
            other => bail!("unknown argument '{other}'"),
        }
    }
    Ok(Some(args))
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let Some(args) = parse_args()? else {
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => DesignerConfig::load_from_file(path)?,
        None => DesignerConfig::default_path()
            .and_then(|path| DesignerConfig::load_or_default(&path))
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default designer config");
                DesignerConfig::default()
            }),
    };

    let mut app = RaceConfigurator::new(&config)?;
    let mut notices = app.messages().subscribe();

    if let Some(width) = args.width {
        app.designer_mut().set_line_width(width);
    }
    app.designer_mut()
        .load_template(args.template.unwrap_or(TemplateShape::Oval));

    let name = args.name.unwrap_or_default();
    let saved = app.save_track(&name).map(|record| {
        (
            serde_json::json!({
                "id": record.id(),
                "name": record.name(),
                "kind": record.kind(),
                "width": record.width(),
                "created": record.created(),
            }),
            record.image_data().to_string(),
        )
    });

    while let Ok(notice) = notices.try_recv() {
        eprintln!("[{}] {}", notice.level, notice);
    }

    let (summary, image_data) = saved?;
    if let Some(out) = &args.out {
        std::fs::write(out, png_bytes_from_data_url(&image_data)?)
            .with_context(|| format!("writing {}", out.display()))?;
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
