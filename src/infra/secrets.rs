use std::panic;

pub const REDACTED: &str = "[REDACTED]";

const SENSITIVE_MARKERS: [&str; 6] = ["password", "passwd", "secret", "token", "apikey", "api_key"];

const VISIBLE_SUFFIX_CHARS: usize = 4;

/// Redacts sensitive words. Whitespace, including control characters like
/// `\r\n`, is kept as it was.
pub fn redact_text(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut word_start = None;

    for (index, ch) in input.char_indices() {
        match (ch.is_whitespace(), word_start) {
            (true, Some(start)) => {
                output.push_str(&redact_word(&input[start..index]));
                output.push(ch);
                word_start = None;
            }
            (true, None) => output.push(ch),
            (false, None) => word_start = Some(index),
            (false, Some(_)) => {}
        }
    }

    if let Some(start) = word_start {
        output.push_str(&redact_word(&input[start..]));
    }
    output
}

/// Masks all but the last few characters of a stored secret for display.
pub fn mask_secret(secret: &str) -> String {
    let total = secret.chars().count();
    if total <= VISIBLE_SUFFIX_CHARS * 2 {
        return REDACTED.to_owned();
    }

    let suffix: String = secret.chars().skip(total - VISIBLE_SUFFIX_CHARS).collect();
    format!("{}{suffix}", "*".repeat(total - VISIBLE_SUFFIX_CHARS))
}

pub fn install_panic_redaction_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic payload omitted".to_owned());

        let scrubbed = redact_text(&payload);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "bbsterm panic: {} at {}:{}:{}",
                scrubbed,
                location.file(),
                location.line(),
                location.column()
            );
        } else {
            eprintln!("bbsterm panic: {}", scrubbed);
        }
    }));
}

fn redact_word(word: &str) -> String {
    let lowered = word.to_ascii_lowercase();
    if SENSITIVE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
        || looks_like_secret_value(word)
    {
        REDACTED.to_owned()
    } else {
        word.to_owned()
    }
}

fn looks_like_secret_value(value: &str) -> bool {
    let cleaned = value.trim_matches(|ch: char| !ch.is_ascii_alphanumeric());

    let has_mixed = cleaned.chars().any(|ch| ch.is_ascii_alphabetic())
        && cleaned.chars().any(|ch| ch.is_ascii_digit());

    cleaned.len() >= 12 && has_mixed
}
