use std::io;

pub trait SecretPrompt {
    /// Reads a secret without echo. `None` means the user gave nothing.
    fn prompt_secret(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

pub struct StdPrompt;

impl SecretPrompt for StdPrompt {
    fn prompt_secret(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match rpassword::prompt_password(prompt) {
            Ok(secret) => Ok(non_empty(secret)),
            Err(source) if source.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(source) => Err(source),
        }
    }
}

/// Builds the prompt text, hinting when a remembered value will be used.
pub fn password_prompt(has_remembered: bool) -> &'static str {
    if has_remembered {
        "Password (empty to use remembered): "
    } else {
        "Password: "
    }
}

fn non_empty(secret: String) -> Option<String> {
    let trimmed = secret.trim_end_matches(['\r', '\n']);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answer_means_none() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("\r\n".to_owned()), None);
    }

    #[test]
    fn keeps_inner_and_leading_whitespace() {
        assert_eq!(non_empty(" pass word\n".to_owned()), Some(" pass word".to_owned()));
    }

    #[test]
    fn prompt_mentions_remembered_value() {
        assert!(password_prompt(true).contains("remembered"));
        assert_eq!(password_prompt(false), "Password: ");
    }
}
