//! Destructive-action confirmation capability.
//!
//! Business flows ask for confirmation through this trait; how the question
//! reaches the user (native dialog, browser confirm, terminal) is an
//! adapter detail.

/// Ask the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Confirms everything. Suits headless runs and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Terminal adapter: prints the message and reads an answer from stdin.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdioConfirm;

impl Confirm for StdioConfirm {
    fn confirm(&self, message: &str) -> bool {
        use std::io::Write as _;

        print!("{message} [y/N] ");
        if std::io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}
