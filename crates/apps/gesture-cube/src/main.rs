use anyhow::Context;
use clap::Parser;
use devices::{HandSource, RecordedSource, ScriptedSource};
use gesture_cube::{cli::Cli, AppConfig, GestureCube};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.config.as_deref())?;

    let mut source: Box<dyn HandSource> = match &cli.input {
        Some(path) => Box::new(
            RecordedSource::open(path)
                .with_context(|| format!("failed to open recording {}", path.display()))?,
        ),
        None => {
            info!("no --input given, running the scripted demo");
            Box::new(ScriptedSource::demo())
        }
    };

    let mut cube = GestureCube::new(config)?;
    let summary = cube.run(source.as_mut(), cli.frames);

    if cli.summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if let Some(last) = &summary.last {
        println!(
            "{} frames ({} unreadable): rotation x={:.3} y={:.3} rad, zoom={:.2}, \"{}\"",
            summary.frames,
            summary.bad_frames,
            last.rotation_x,
            last.rotation_y,
            last.zoom,
            last.label
        );
    } else {
        println!("no frames processed");
    }

    if let Some(error) = &summary.error {
        anyhow::bail!("frame source {} failed: {error}", summary.source);
    }
    Ok(())
}
