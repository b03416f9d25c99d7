//! Interactive prompts.

use console::Term;
use dialoguer::Input;

use crate::error::{OnboardError, Result};

use super::Prompt;

/// Convert dialoguer errors to OnboardError.
fn map_dialoguer_err(e: dialoguer::Error) -> OnboardError {
    OnboardError::Io(e.into())
}

/// Prompt the user for one line of free-form input.
///
/// An empty answer is accepted and returned as an empty string.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    let answer: String = Input::<String>::new()
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    tracing::debug!("Prompt '{}' answered with {:?}", prompt.key, answer);
    Ok(answer)
}
