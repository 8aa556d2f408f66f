//! Headless Slider Demo
//!
//! Drives an autoplaying slider through a full loop with the recording view
//! and prints the slide strip after each step:
//! - Autoplay advances every second
//! - A dot press jumps mid-run
//! - The wraparound clone appears, slides in, and is snapped away
//!
//! Run with: RUST_LOG=glide_slider=debug cargo run -p glide_slider --example headless_slider

use anyhow::{Context, Result};
use glide_slider::prelude::*;
use std::time::Duration;

const SLIDE_COUNT: usize = 4;
const STEP: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = SliderConfig::from_json(r#"{ "autoplay": true, "duration": 1000 }"#);
    let mut host = RecordingHost::new().with_container("#hero", SLIDE_COUNT);
    let mut slider =
        Slider::mount(&mut host, "#hero", config).context("failed to mount slider")?;

    while slider.now() < Duration::from_millis(6000) {
        if slider.now() == Duration::from_millis(1500) {
            let outcome = slider.handle_event(SliderEvent::IndicatorPressed(3))?;
            tracing::info!(?outcome, to = ?outcome.target(), "dot pressed");
        }

        slider.advance(STEP);
        tracing::info!(
            at = ?slider.now(),
            index = slider.current(),
            phase = ?slider.phase(),
            strip = %render_strip(slider.view()),
        );
    }

    let view = slider.teardown();
    tracing::info!(ops = view.ops().len(), "done");
    Ok(())
}

/// One character per slide: `#` centered, `<` leading, `>` trailing
fn render_strip(view: &RecordingView) -> String {
    let mut strip: String = view
        .transforms()
        .iter()
        .map(|transform| match transform {
            SlideTransform::Leading => '<',
            SlideTransform::Center => '#',
            SlideTransform::Trailing => '>',
        })
        .collect();
    if view.clone_count() > 0 {
        strip.push_str(" +clone");
    }
    strip
}
