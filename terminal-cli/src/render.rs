//! Text and HTML output for the table.
//!
//! Player-supplied text only ever reaches HTML output through [`escape_html`].

use std::fmt::Write;

use quarks_execution::RoundReport;
use quarks_types::{
    escape_html, GameKind, Outcome, ResultPayload, Settlement, ValidationError, Wager,
    CASINO_NAME,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Html,
}

impl Format {
    pub fn from_flag(html: bool) -> Self {
        if html {
            Format::Html
        } else {
            Format::Text
        }
    }
}

pub fn validation_message(err: ValidationError, format: Format) -> String {
    let text = validation_text(err);
    match format {
        Format::Text => format!("Validation: {text}"),
        Format::Html => format!("<strong>Validation:</strong> {text}"),
    }
}

/// Rejection as a JSON object, for `--json` callers.
pub fn validation_json(err: ValidationError) -> serde_json::Value {
    serde_json::json!({
        "error": err.code(),
        "message": validation_text(err),
    })
}

fn validation_text(err: ValidationError) -> &'static str {
    match err {
        ValidationError::NotANumber | ValidationError::NotPositive => {
            "Your wager must be a number greater than 0."
        }
        ValidationError::EmptyName => "Please enter a display name to play Quarks Casino.",
    }
}

/// Shown as soon as the dice leave the cup.
pub fn wager_accepted(name: &str, wager: Wager, format: Format) -> String {
    match format {
        Format::Text => format!("Welcome {name}! Wager accepted: {wager} credits. Rolling dice..."),
        Format::Html => format!(
            "Welcome <strong>{}</strong>! Wager accepted: <em>{wager} credits</em>. Rolling dice...",
            escape_html(name)
        ),
    }
}

pub fn dice_line(dice: &[u8], format: Format) -> String {
    let sep = match format {
        Format::Text => "   ",
        Format::Html => " &nbsp;&nbsp; ",
    };
    let mut out = String::new();
    for (idx, die) in dice.iter().enumerate() {
        let _ = write!(out, "Die {}: {die}{sep}", idx + 1);
    }
    let sum: u32 = dice.iter().map(|&die| u32::from(die)).sum();
    let _ = write!(out, "Sum: {sum}");
    match format {
        Format::Text => out,
        Format::Html => format!("<span class=\"dice\">{out}</span>"),
    }
}

pub fn headline(result: &ResultPayload, format: Format) -> String {
    let (title, detail) = match (result.outcome, result.game) {
        (Outcome::Lose, GameKind::Craps) => {
            ("CRAPS - you lose!", "Better luck at the next quantum flip.")
        }
        (Outcome::Win, GameKind::Craps) => ("You won!", "Even doubles are lucky at Quarks Casino."),
        (Outcome::Push, _) => ("You pushed!", "Neither win nor lose - safe for now."),
        (Outcome::Win, GameKind::Threshold) => ("You won!", "The quarks lined up for you."),
        (Outcome::Lose, GameKind::Threshold) => ("You lose!", "The house keeps this one."),
    };
    match format {
        Format::Text => format!("[{}] {title} {detail}", result.label),
        Format::Html => format!("<strong>{title}</strong> {detail}"),
    }
}

pub fn settlement_line(result: &ResultPayload, format: Format) -> String {
    let text = match result.settlement {
        Some(Settlement::Payout(amount)) => format!("Payout: {amount} credits (demo payout)."),
        Some(Settlement::Loss(amount)) => format!("Wager lost: {amount} credits."),
        None => "No change to your wager - try again.".to_string(),
    };
    match format {
        Format::Text => text,
        Format::Html => format!("<span class=\"small\">{text}</span>"),
    }
}

/// Full report for a revealed round.
pub fn report(report: &RoundReport, format: Format) -> String {
    let lines = [
        greeting(report, format),
        dice_line(&report.result.dice, format),
        headline(&report.result, format),
        settlement_line(&report.result, format),
    ];
    match format {
        Format::Text => lines.join("\n"),
        Format::Html => lines.join("<br>"),
    }
}

fn greeting(report: &RoundReport, format: Format) -> String {
    match format {
        Format::Text => report.greeting.clone(),
        Format::Html => format!(
            "Welcome to {CASINO_NAME}, {} - good luck!",
            escape_html(report.player.name())
        ),
    }
}
