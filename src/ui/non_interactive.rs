//! Non-interactive UI for scripts and pipes.

use std::collections::HashMap;

use crate::error::{Result, ShopError};

use super::theme::ShopTheme;
use super::{
    parse_confirm, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface,
};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "TURTLESHOP_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `TURTLESHOP_PROMPT_<KEY>` environment variables,
/// then from the prompt's default; anything else is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn answer(&self, prompt: &Prompt) -> Option<String> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        self.env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .cloned()
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            eprintln!("  {}", hint);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let Some(value) = self.answer(prompt) else {
            return Err(ShopError::NonInteractive {
                key: prompt.key.clone(),
            });
        };

        match prompt.prompt_type {
            PromptType::Confirm => Ok(PromptResult::Bool(parse_confirm(&value))),
            _ => Ok(PromptResult::String(value)),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            eprintln!("  {}", message);
        }
        Box::new(NoopSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that only prints its outcome.
struct NoopSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", ShopTheme::plain().format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", ShopTheme::plain().format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(key: &str, default: Option<&str>) -> Prompt {
        Prompt {
            key: key.to_string(),
            question: "Test?".to_string(),
            prompt_type: PromptType::Input,
            default: default.map(String::from),
        }
    }

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let result = ui.prompt(&input("username", Some("emilys"))).unwrap();
        assert_eq!(result.as_string(), "emilys");
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let err = ui.prompt(&input("password", None)).unwrap_err();
        assert!(matches!(err, ShopError::NonInteractive { ref key } if key == "password"));
    }

    #[test]
    fn prompt_uses_env_override() {
        let overrides = HashMap::from([(
            "TURTLESHOP_PROMPT_USERNAME".to_string(),
            "michaelw".to_string(),
        )]);
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);

        let result = ui.prompt(&input("username", Some("emilys"))).unwrap();
        assert_eq!(result.as_string(), "michaelw");
    }

    #[test]
    fn password_prompt_reads_env() {
        let overrides = HashMap::from([(
            "TURTLESHOP_PROMPT_PASSWORD".to_string(),
            "emilyspass".to_string(),
        )]);
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt::new("password", "Password", PromptType::Password);

        assert_eq!(
            ui.prompt(&prompt).unwrap(),
            PromptResult::String("emilyspass".into())
        );
    }

    #[test]
    fn confirm_prompt_parses_answer() {
        let overrides = HashMap::from([("TURTLESHOP_PROMPT_CLEAR".to_string(), "yes".to_string())]);
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt::new("clear", "Clear favorites?", PromptType::Confirm);

        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(true));
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn noop_spinner_methods() {
        let mut spinner = NoopSpinner {
            mode: OutputMode::Silent,
        };
        spinner.set_message("test");
        spinner.finish_success("done");
    }
}
