//! Todo list formatting

use crate::models::TodoItem;
use crate::reports::TodoCounts;

/// Format the visible todos followed by the counts line
pub fn format_todo_list(visible: &[&TodoItem], counts: TodoCounts) -> String {
    let mut output = String::new();

    if visible.is_empty() {
        output.push_str("No todos to show.\n");
    } else {
        for todo in visible {
            let mark = if todo.completed { 'x' } else { ' ' };
            output.push_str(&format!(
                "[{}] {:>14}  {:<6}  {}\n",
                mark,
                todo.id,
                todo.priority.as_str(),
                todo.text
            ));
        }
    }

    output.push_str(&format!(
        "Total todos: {}  Active: {}  Completed: {}\n",
        counts.total, counts.active, counts.completed
    ));
    output
}
