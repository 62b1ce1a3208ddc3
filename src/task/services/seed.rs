//! Example tasks written when no task file exists yet.

use crate::task::domain::{Task, TaskDomainError, TaskStatus, TaskTitle};
use mockable::Clock;

const EXAMPLES: [(&str, &str, TaskStatus); 3] = [
    (
        "Complete project setup",
        "Set up the React and Node.js environment",
        TaskStatus::Todo,
    ),
    (
        "Design UI components",
        "Create wireframes and design system",
        TaskStatus::InProgress,
    ),
    (
        "Write documentation",
        "Create README and API documentation",
        TaskStatus::Done,
    ),
];

/// Builds one example task per status, in board column order.
///
/// # Errors
///
/// Returns [`TaskDomainError`] if an example title fails validation.
pub fn example_tasks(clock: &impl Clock) -> Result<Vec<Task>, TaskDomainError> {
    EXAMPLES
        .iter()
        .map(|&(title, description, status)| {
            Ok(Task::new(TaskTitle::new(title)?, description, status, clock))
        })
        .collect()
}
