//! Scene sequencer
//!
//! Plays a [`Script`] one step at a time. Each step is awaited to
//! completion before the next one starts, and a started script always
//! runs to its end.

use crate::config::scale_delay;
use crate::display::{DisplayDriver, Surface};
use crate::error::TerminalError;
use crate::export::Exporter;
use crate::scenes::content::{CLASSIFIED_REPORT, REPORT_FILE_NAME, SECTOR_11_LOG};
use crate::types::{AuditLog, Finish, Script, SideEffect, Step};
use std::time::Duration;

pub mod debug;

/// Everything a step may touch while it runs
pub struct SceneContext<'a, S: Surface> {
    pub driver: &'a mut DisplayDriver<S>,
    pub audit: &'a mut AuditLog,
    pub exporter: &'a dyn Exporter,
    /// Multiplier for `Step::Delay`
    pub delay_scale: f32,
}

/// Run every step of `script` in order and report how it finishes
pub async fn play<S: Surface>(
    script: &Script,
    ctx: &mut SceneContext<'_, S>,
) -> Result<Finish, TerminalError> {
    log::info!("[Scene] {} started ({} steps)", script.id.name(), script.steps.len());

    for (index, step) in script.steps.iter().enumerate() {
        log::debug!("[Scene] {} step {}: {:?}", script.id.name(), index, step);
        run_step(step, ctx).await?;
    }

    log::info!("[Scene] {} finished -> {:?}", script.id.name(), script.finish);
    Ok(script.finish)
}

/// Run a single step
pub async fn run_step<S: Surface>(
    step: &Step,
    ctx: &mut SceneContext<'_, S>,
) -> Result<(), TerminalError> {
    match step {
        Step::Reveal(text) => ctx.driver.reveal(text).await,
        Step::WriteLine(text) => ctx.driver.write_line(text),
        Step::Delay(delay) => {
            let scaled = scale_delay(*delay, ctx.delay_scale);
            if scaled > Duration::ZERO {
                tokio::time::sleep(scaled).await;
            }
            Ok(())
        }
        Step::Effect(effect) => run_effect(*effect, ctx).await,
    }
}

async fn run_effect<S: Surface>(
    effect: SideEffect,
    ctx: &mut SceneContext<'_, S>,
) -> Result<(), TerminalError> {
    match effect {
        SideEffect::RecordAudit(description) => {
            ctx.audit.record(description);
            Ok(())
        }
        SideEffect::WriteAuditLog => {
            ctx.driver.surface_mut().append(SECTOR_11_LOG)?;
            ctx.driver.surface_mut().append(&ctx.audit.render())?;
            Ok(())
        }
        SideEffect::ExportReport => {
            // A failed save never interrupts the scene
            match ctx.exporter.export(REPORT_FILE_NAME, CLASSIFIED_REPORT).await {
                Ok(path) => log::debug!("[Export] report saved to {}", path.display()),
                Err(err) => log::warn!("[Export] report not saved: {err}"),
            }
            Ok(())
        }
    }
}
