use crate::domain::AppError;

/// Port for yes/no questions asked before destructive or long-running steps.
pub trait Confirmer {
    /// Returns `Ok(true)` only for an affirmative answer.
    fn confirm(&self, prompt: &str) -> Result<bool, AppError>;
}

impl<C: Confirmer + ?Sized> Confirmer for Box<C> {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        (**self).confirm(prompt)
    }
}
