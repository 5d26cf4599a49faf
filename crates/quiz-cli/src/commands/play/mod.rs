mod input;
mod render;

use std::sync::Arc;

use anyhow::Context;
use quiz_core::contracts::ResultSink;
use quiz_core::enums::ViolationKind;
use quiz_core::ids::UuidIds;
use quiz_session::{QuizSession, ResultView, SessionDriver, SessionUpdate, SignalHub, Transition};

use crate::cli::root_commands::PlayArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{hint, output};
use crate::terminal::{self, FocusReporting, InputEvent};
use input::PlayerCommand;

enum Flow {
    Continue,
    Quit,
}

pub async fn handle(args: &PlayArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let quiz = ctx
        .store
        .find(&args.quiz_id)
        .await
        .with_context(|| format!("failed to load quiz '{}'", args.quiz_id))?;
    let session = QuizSession::new(quiz, Arc::new(UuidIds))
        .context("quiz cannot be played")?
        .with_penalty_lock(ctx.config.session.lock_penalized);

    let hub = SignalHub::new();
    let (driver, mut updates) = SessionDriver::spawn(
        session,
        Arc::new(hub.clone()),
        Arc::clone(&ctx.results),
        ctx.config.session.tick_period(),
    );

    let focus = FocusReporting::enable();
    println!("{}", render::rules(&driver.snapshot().await?, focus.is_enabled()));
    let mut input = terminal::spawn_input_reader();
    driver.start()?;

    loop {
        let flow = tokio::select! {
            update = updates.recv() => match update {
                Some(update) => on_update(update, &driver).await?,
                None => Flow::Quit,
            },
            event = input.recv() => match event {
                Some(event) => on_input(event, &driver, &hub).await?,
                None => Flow::Quit,
            },
            _ = tokio::signal::ctrl_c() => Flow::Quit,
        };
        if matches!(flow, Flow::Quit) {
            break;
        }
    }

    drop(focus);
    let session = driver.shutdown().await?;

    match session.result() {
        Some(result) => {
            // The driver records results in the background; make sure this one
            // is on disk before the process exits.
            ctx.results
                .record(result)
                .await
                .context("failed to record quiz result")?;
            if let Some(path) = ctx.results.path() {
                hint(flags, format!("Result saved to {}", path.display()));
            }
            tracing::info!(quiz = %result.quiz_id, score = result.score, total = result.total, "quiz finished");
        }
        None if session.is_in_progress() => {
            let view = session.view();
            hint(
                flags,
                format!("Quiz abandoned at question {}/{}.", view.position, view.total),
            );
        }
        None => {}
    }

    if flags.format != OutputFormat::Table {
        output(&session.view(), flags)?;
    }
    Ok(())
}

async fn on_update(update: SessionUpdate, driver: &SessionDriver) -> anyhow::Result<Flow> {
    let transition = match update {
        SessionUpdate::Violation { notice, .. } => {
            println!("\n! {notice}");
            return Ok(Flow::Continue);
        }
        SessionUpdate::Transition(transition) => transition,
    };

    if let Some(result) = transition.completed_result() {
        println!("{}", render::result(&ResultView::new(result)));
        return Ok(Flow::Continue);
    }

    match &transition {
        Transition::Started
        | Transition::Advanced { .. }
        | Transition::Retreated { .. }
        | Transition::Penalized { .. } => {
            println!("{}", render::question(&driver.snapshot().await?));
        }
        Transition::Selected { option_id, .. } => {
            if let Some(line) = render::selected(&driver.snapshot().await?, option_id) {
                println!("{line}");
            }
        }
        Transition::Ticked { remaining } => {
            if let Some(line) = render::time_warning(*remaining) {
                println!("{line}");
            }
        }
        Transition::Reset => {
            println!("\nStarting over with a fresh shuffle.");
            driver.start()?;
        }
        Transition::Ignored { notice } => println!("  {notice}"),
        Transition::Completed { .. } => {}
    }
    Ok(Flow::Continue)
}

async fn on_input(
    event: InputEvent,
    driver: &SessionDriver,
    hub: &SignalHub,
) -> anyhow::Result<Flow> {
    let line = match event {
        InputEvent::FocusLost => {
            let notified = hub.emit(ViolationKind::Visibility);
            tracing::debug!(notified, "terminal lost focus");
            return Ok(Flow::Continue);
        }
        InputEvent::FocusGained => return Ok(Flow::Continue),
        InputEvent::Closed => return Ok(Flow::Quit),
        InputEvent::Line(line) => line,
    };

    match input::parse(&line) {
        PlayerCommand::Choose(index) => {
            let view = driver.snapshot().await?;
            match view.options.get(index) {
                Some(option) => driver.select(option.id.clone())?,
                None => println!("  There is no option {line}."),
            }
        }
        PlayerCommand::Next => driver.next()?,
        PlayerCommand::Previous => driver.previous()?,
        PlayerCommand::Reset => driver.reset()?,
        PlayerCommand::Quit => return Ok(Flow::Quit),
        PlayerCommand::Help => println!("{}", render::HELP),
        PlayerCommand::Empty => {}
        PlayerCommand::Unknown(text) => println!("  Unknown command '{text}'. Type h for help."),
    }
    Ok(Flow::Continue)
}
