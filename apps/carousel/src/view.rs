//! Terminal rendering of the banner carousel and the interactive loop.

use std::{fs, future::Future, io::Write, path::Path, time::Duration};

use anyhow::Context;
use rotation_core::Carousel;
use shared::{
    domain::{SlideDescriptor, SlideId},
    protocol::{RotationEvent, RotationSnapshot},
};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::broadcast::error::RecvError,
    time::Instant,
};
use tracing::{info, warn};

use crate::commands::{dispatch_view_command, ViewCommand};

pub fn load_slides(path: &Path) -> anyhow::Result<Vec<SlideDescriptor>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read slides file '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse slides file '{}'", path.display()))
}

pub fn demo_slides() -> Vec<SlideDescriptor> {
    [
        ("Welcome Week", "Meet every student society on the main lawn"),
        ("Spring Hackathon", "48 hours, free food, real prizes"),
        ("Career Fair", "Bring your CV; 60 employers on site"),
        ("Winter Concert", "Tickets on sale now in the student hub"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, subtitle))| SlideDescriptor {
        id: SlideId(i as i64 + 1),
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
        image_url: None,
        link: None,
    })
    .collect()
}

const IGNORED_COMMAND: &str = "(ignored: still settling, or index unchanged or out of range)";

/// One line per render: position dots, slide title and a settling marker.
pub fn render_line(snapshot: &RotationSnapshot, slide: Option<&SlideDescriptor>) -> String {
    let (Some(index), Some(slide)) = (snapshot.current_index, slide) else {
        return "(no banners to show)".to_string();
    };

    let dots: String = (0..snapshot.item_count)
        .map(|i| if i == index { '●' } else { '○' })
        .collect();
    let mut line = format!(
        "{dots} [{}/{}] {}",
        index + 1,
        snapshot.item_count,
        slide.title
    );
    if let Some(subtitle) = &slide.subtitle {
        line.push_str(" - ");
        line.push_str(subtitle);
    }
    if snapshot.transitioning {
        line.push_str(" ~");
    }
    line
}

fn render(carousel: &Carousel<SlideDescriptor>) -> String {
    render_line(&carousel.observe(), carousel.current())
}

fn emit(out: &mut impl Write, line: &str) -> anyhow::Result<()> {
    writeln!(out, "{line}").context("failed to write view output")?;
    out.flush().context("failed to flush view output")
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Drives the carousel from `input` until quit, EOF, `shutdown` or `run_for`
/// elapses, then calls the disposal hook once. With `run_for` set, EOF only
/// stops reading; rotation continues until the deadline.
pub async fn run<R, W>(
    carousel: &Carousel<SlideDescriptor>,
    input: R,
    out: &mut W,
    shutdown: impl Future<Output = ()>,
    run_for: Option<Duration>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut events = carousel.controller().subscribe();
    let mut lines = input.lines();
    let deadline = run_for.map(|d| Instant::now() + d);
    let mut input_open = true;
    tokio::pin!(shutdown);

    emit(out, &render(carousel))?;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line.context("failed to read input")? {
                    None if deadline.is_some() => input_open = false,
                    None => break,
                    Some(line) => match line.parse::<ViewCommand>() {
                        Ok(ViewCommand::Quit) => break,
                        Ok(ViewCommand::Status) => emit(out, &render(carousel))?,
                        Ok(cmd) => {
                            if !dispatch_view_command(carousel, cmd) {
                                emit(out, IGNORED_COMMAND)?;
                            }
                        }
                        Err(err) => emit(out, &err.to_string())?,
                    },
                }
            }
            event = events.recv() => match event {
                Ok(RotationEvent::Stopped) | Err(RecvError::Closed) => break,
                Ok(_) => emit(out, &render(carousel))?,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "view fell behind rotation events");
                    emit(out, &render(carousel))?;
                }
            },
            _ = &mut shutdown => break,
            _ = wait_until(deadline) => {
                info!("run time elapsed");
                break;
            }
        }
    }

    carousel.stop();
    Ok(())
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
