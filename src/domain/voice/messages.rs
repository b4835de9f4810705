//! Phrases spoken back to the user.

pub const TASK_STARTED: &str = "Started a long-running task. Ask for the result to hear it.";
pub const TASK_CANCELED: &str = "This was canceled.";
pub const TASK_RESTARTING: &str = "Restarting. Please wait and ask about progress again.";
pub const TASK_FAILED: &str = "This failed.";
pub const TASK_IN_PROGRESS: &str = "Please wait and ask about progress again.";
pub const NOT_UNDERSTOOD: &str = "Sorry, I didn't understand that.";

/// Reason recorded on the instance when the user leaves mid-task.
pub const USER_CANCELED_REASON: &str = "User canceled";

/// Announces a finished task together with its output.
pub fn task_finished(output: &str) -> String {
    format!("Finished. The result is {}.", output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_finished_embeds_output() {
        assert_eq!(task_finished("42"), "Finished. The result is 42.");
    }
}
