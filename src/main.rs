use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{debug, info};

use casino_finder::adapters::{
    BuiltinDefinitionSource, FileDefinitionSource, LoadingOutcome, LoadingSequence,
};
use casino_finder::application::QuizSession;
use casino_finder::config::AppConfig;
use casino_finder::domain::foundation::{DomainError, StepStatus};
use casino_finder::domain::quiz::SelectOutcome;
use casino_finder::ports::QuizDefinitionSource;

/// A line of player input.
enum Command {
    Choose(usize),
    Back,
    Reset,
    Quit,
    Unknown,
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "b" | "back" => Command::Back,
            "r" | "reset" => Command::Reset,
            "q" | "quit" => Command::Quit,
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Command::Choose(n - 1),
                _ => Command::Unknown,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let source: Box<dyn QuizDefinitionSource> = match &config.quiz.definition_path {
        Some(path) => Box::new(FileDefinitionSource::new(path)),
        None => Box::new(BuiltinDefinitionSource::default()),
    };
    info!(source = %source.describe(), "Loading quiz definition");

    let definition = match source.load().await {
        Ok(definition) => definition,
        Err(e) => {
            report(&e, config.features.verbose_errors);
            std::process::exit(1);
        }
    };

    let mut session = QuizSession::new(Arc::new(definition));
    let loading = LoadingSequence::new(config.loading.sequence_config());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Casino Finder v{}", env!("CARGO_PKG_VERSION"));
    println!("   Enter an option number. b = back, r = start over, q = quit.\n");

    loop {
        if session.is_complete() {
            println!("\nr = start over, q = quit");
        } else {
            render_step(&session);
        }

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => break,
        };
        let Some(line) = line else {
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Reset => session.reset(),
            Command::Back => {
                if !session.go_back() {
                    println!("Nothing to go back to.");
                }
            }
            Command::Choose(index) => {
                if session.is_complete() {
                    continue;
                }
                match session.select_index(index) {
                    SelectOutcome::Completed => {
                        if !config.features.skip_loading_sequence {
                            run_loading(&loading).await;
                        }
                        session.recommend();
                        render_results(&session, &config);
                    }
                    SelectOutcome::Advanced { .. } => {}
                    SelectOutcome::Ignored => println!("Pick one of the listed numbers."),
                }
            }
            Command::Unknown => println!("Unrecognised input."),
        }

        for event in session.take_events() {
            debug!(?event, "Quiz event");
        }
    }

    Ok(())
}

async fn run_loading(loading: &LoadingSequence) {
    let (cancel_tx, cancel_rx) = watch::channel(false);
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = cancel_tx.send(true);
        }
    });

    let outcome = loading.run(cancel_rx, |message| println!("   {message}")).await;
    ctrl_c.abort();

    if outcome == LoadingOutcome::Cancelled {
        println!("   (skipped)");
    }
}

fn render_step(session: &QuizSession) {
    let progress = session.progress();
    let bar: String = progress
        .steps()
        .iter()
        .map(|s| match s.status {
            StepStatus::Completed => '■',
            StepStatus::Active => '▣',
            StepStatus::Upcoming => '□',
        })
        .chain(std::iter::once('★'))
        .collect();
    let (index, total) = progress.position();
    println!("{bar}  {index}/{total}  ({:.0}%)", progress.percent());

    let current = session.current_step();
    println!("\n{}\n{}", current.step.title, current.step.question);
    for (i, option) in current.step.options.iter().enumerate() {
        let marker = if current.selected == Some(option.value.as_str()) {
            "*"
        } else {
            " "
        };
        println!(" {marker}{}. {} {}", i + 1, option.icon, option.label);
    }
    if session.can_go_back() {
        println!("   b. Back");
    }
}

fn render_results(session: &QuizSession, config: &AppConfig) {
    let Some(shortlist) = session.results() else {
        return;
    };

    if shortlist.is_empty() {
        println!("\n{}", config.display.no_results_message);
        return;
    }

    println!("\n{}", config.display.results_intro_for(session.catalog_size()));
    for (rank, entry) in shortlist.entries().iter().enumerate() {
        let casino = &entry.casino;
        let badge = if rank == 0 { "  Best Match" } else { "" };
        println!(
            "\n{}. {}{badge}\n   Match {}%   Rating {}   Payout {}",
            rank + 1,
            casino.name,
            entry.score,
            casino.rating,
            casino.payout_speed.label(),
        );
        for line in [
            &casino.display.bonus_text,
            &casino.display.promo_code,
            &casino.display.affiliate_url,
        ] {
            if !line.is_empty() {
                println!("   {line}");
            }
        }
    }
}

fn report(error: &DomainError, verbose: bool) {
    if verbose {
        eprintln!("Error: {error}");
        for (key, value) in &error.details {
            eprintln!("  {key}: {value}");
        }
    } else {
        eprintln!("Error: {}", error.message);
    }
}
