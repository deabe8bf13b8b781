//! An interactive Texas Hold-Em hand ranking quiz.
//!
//! The `cards` module owns the card universe and the hand evaluator; the
//! `quiz` module turns it into dealt scenarios, multiple-choice rounds,
//! and an interactive terminal session.

pub mod cards;
pub mod quiz;

/// Initialize terminal logging on stderr.
///
/// Quiz text owns stdout; diagnostics stay out of its way. Location,
/// target, and thread fields are suppressed to keep lines short.
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
