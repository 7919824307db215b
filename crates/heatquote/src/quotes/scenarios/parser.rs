use regex::Regex;
use std::sync::OnceLock;

static BEDROOM_PATTERN: OnceLock<Regex> = OnceLock::new();
static BATHROOM_PATTERN: OnceLock<Regex> = OnceLock::new();
static ADULTS_PATTERN: OnceLock<Regex> = OnceLock::new();

fn bedroom_pattern() -> &'static Regex {
    BEDROOM_PATTERN.get_or_init(|| Regex::new(r"(?i)(\d+)\s*-\s*bedroom").expect("pattern compiles"))
}

fn bathroom_pattern() -> &'static Regex {
    // Descriptions read "1 main bathroom" or "2 bathrooms"; words may sit
    // between the count and "bath" but never punctuation.
    BATHROOM_PATTERN.get_or_init(|| Regex::new(r"(?i)(\d+)[\s\w]*bath").expect("pattern compiles"))
}

fn adults_pattern() -> &'static Regex {
    ADULTS_PATTERN.get_or_init(|| Regex::new(r"(?i)(\d+)\s*adults").expect("pattern compiles"))
}

pub(crate) fn bedroom_count(description: &str) -> Option<u8> {
    bedroom_pattern()
        .captures(description)
        .and_then(|caps| caps[1].parse().ok())
}

pub(crate) fn bathroom_count(description: &str) -> Option<u8> {
    bathroom_pattern()
        .captures(description)
        .and_then(|caps| caps[1].parse().ok())
}

/// Decodes a free-text occupant descriptor into a comparable headcount.
///
/// Ranges decode to their midpoint; unrecognized text decodes to `None`
/// rather than failing, so scoring degrades to a zero sub-score.
pub(crate) fn occupant_estimate(occupants: &str) -> Option<f64> {
    if occupants.contains("1-2") {
        return Some(1.5);
    }
    if occupants.contains("2-3") {
        return Some(2.5);
    }
    if occupants.contains("3-4") {
        return Some(3.5);
    }
    if occupants.contains("family of 4") {
        return Some(4.0);
    }
    if occupants.contains("family of 5") {
        return Some(5.0);
    }
    if occupants.contains("couple") {
        return Some(2.0);
    }

    adults_pattern()
        .captures(occupants)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .map(f64::from)
}
