//! TalentScout - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use talentscout::cli::args::API_KEY_ENV;
use talentscout::cli::{Args, Commands};
use talentscout::config::Config;
use talentscout::generation::{FallbackGenerator, GeminiProvider, QuestionGenerator};
use talentscout::session::{ScreeningSession, ScreeningStep, UserAction};
use talentscout::ui::ConsoleUi;
use talentscout::ScreenError;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.clone())?;
    if !args.models.is_empty() {
        config.fallback.models = args.models.clone();
    }
    config.validate()?;

    match &args.command {
        Some(Commands::Config) => {
            show_config(&config);
            return Ok(());
        }
        Some(Commands::Models) => {
            show_models(&config);
            return Ok(());
        }
        None => {}
    }

    // Credential gate: checked before any generation attempt is possible
    let Some(api_key) = args.resolve_api_key() else {
        eprintln!("{} No API key configured.", "✗".red());
        eprintln!(
            "\nProvide one with {} or set the {} environment variable.",
            "--api-key".bold(),
            API_KEY_ENV.bold()
        );
        eprintln!("Get a key from https://aistudio.google.com/");
        std::process::exit(2);
    };

    let provider = GeminiProvider::with_config(
        api_key,
        &config.provider.base_url,
        config.provider.timeout_secs,
        config.provider.temperature,
    )?;
    let generator =
        FallbackGenerator::new(provider, config.fallback.models.clone(), config.retry_policy());

    run_screening(&config, &generator).await
}

/// Interactive screening loop
///
/// One action per iteration: renders the current step, reads the next
/// action, applies it. Rendering never mutates the session except through
/// the memoization guard.
async fn run_screening(config: &Config, generator: &dyn QuestionGenerator) -> Result<()> {
    let mut ui = ConsoleUi::new()?;
    let mut session = ScreeningSession::new(config.field_policy());

    ui.show_banner();

    loop {
        match session.step() {
            ScreeningStep::Greeting => {
                ui.show_info("Press Enter to start the screening (Ctrl-D to quit).");
                match ui.read_line("> ")? {
                    Some(_) => {
                        session.apply(UserAction::Start)?;
                    }
                    None => break,
                }
            }

            ScreeningStep::InfoGathering => {
                let Some(submission) = ui.collect_info(&config.field_policy())? else {
                    break;
                };
                match session.submit_info(submission) {
                    Ok(_) => {}
                    Err(err @ ScreenError::MissingFields { .. })
                    | Err(err @ ScreenError::InvalidField(_)) => {
                        // User-correctable: re-show the form, state unchanged
                        ui.show_screen_error(&err);
                    }
                    Err(err) => return Err(err.into()),
                }
            }

            ScreeningStep::QuestionGeneration => {
                let outcome = if session.questions().is_none() {
                    let spinner = ui.start_generation_spinner();
                    let outcome = session.ensure_questions(generator).await?.clone();
                    spinner.finish_and_clear();
                    outcome
                } else {
                    // Warm cache: the guard returns without calling out
                    session.ensure_questions(generator).await?.clone()
                };
                ui.show_questions(session.record(), &outcome);

                let choice = if outcome.is_failure() {
                    ui.read_line(&format!("{} ", "[r]etry / [f]inish >".bold()))?
                } else {
                    ui.read_line(&format!("{} ", "[f]inish >".bold()))?
                };

                match choice.as_deref().map(str::trim) {
                    Some("r") | Some("retry") if outcome.is_failure() => {
                        session.apply(UserAction::RetryGeneration)?;
                    }
                    Some(_) => {
                        session.apply(UserAction::Finish)?;
                    }
                    None => break,
                }
            }

            ScreeningStep::Exit => {
                ui.show_exit(session.record());
                match ui.read_line(&format!("{} ", "[r]estart / [q]uit >".bold()))? {
                    Some(input) if input.trim() == "r" || input.trim() == "restart" => {
                        session.apply(UserAction::Restart)?;
                        ui.show_banner();
                    }
                    _ => break,
                }
            }
        }
    }

    println!("\n{}", "Goodbye.".dimmed());
    Ok(())
}

fn show_config(config: &Config) {
    println!("\n{}", "TalentScout Configuration".bold());
    println!();
    println!("Provider:");
    println!("  Base URL:     {}", config.provider.base_url);
    println!("  Timeout:      {}s", config.provider.timeout_secs);
    println!("  Temperature:  {}", config.provider.temperature);
    println!();
    println!("Fallback:");
    println!("  Models:             {}", config.fallback.models.join(" → "));
    println!("  Rate-limit retries: {}", config.fallback.rate_limit_retries);
    println!("  Retry delay:        {}ms", config.fallback.retry_delay_ms);
    println!();
    println!("Screening:");
    println!("  Require email:    {}", config.screening.require_email);
    println!("  Require phone:    {}", config.screening.require_phone);
    println!("  Require position: {}", config.screening.require_position);
    println!("  Require location: {}", config.screening.require_location);
    println!("  Max experience:   {} years", config.screening.max_years_experience);
    println!();
}

fn show_models(config: &Config) {
    println!("\nFallback order (first success wins):");
    for (i, model) in config.fallback.models.iter().enumerate() {
        println!("  {}. {}", i + 1, model);
    }
    println!();
}
