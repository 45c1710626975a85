//! Todo CLI commands

use clap::Subcommand;

use super::{require_text, AppContext};
use crate::display::format_todo_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Priority, TodoFilter, TodoId};
use crate::reports::{filtered_todos, TodoCounts};
use crate::store::{TodoState, TodoStore};

/// Todo subcommands
#[derive(Subcommand)]
pub enum TodoCommands {
    /// Add a todo
    Add {
        /// What needs doing
        text: String,

        /// Priority: low, medium or high (defaults to the configured priority)
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// List todos under the current filter
    List {
        /// Switch the filter before listing: all, active or completed
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Mark a todo done, or not done again
    Toggle {
        /// Todo ID
        id: u64,
    },

    /// Change a todo's text
    Edit {
        /// Todo ID
        id: u64,

        /// New text
        text: String,
    },

    /// Delete a todo
    Delete {
        /// Todo ID
        id: u64,
    },

    /// Remove every completed todo
    Clear,

    /// Set which todos the list shows: all, active or completed
    Filter {
        /// all, active or completed
        filter: String,
    },
}

fn parse_filter(input: &str) -> BudgetResult<TodoFilter> {
    TodoFilter::parse(input).ok_or_else(|| {
        BudgetError::Validation(format!(
            "Invalid filter '{}'. Valid filters: all, active, completed",
            input
        ))
    })
}

fn parse_priority(input: &str) -> BudgetResult<Priority> {
    Priority::parse(input).ok_or_else(|| {
        BudgetError::Validation(format!(
            "Invalid priority '{}'. Valid priorities: low, medium, high",
            input
        ))
    })
}

fn require_todo(state: &TodoState, id: TodoId) -> BudgetResult<()> {
    if state.todos.contains(&id) {
        Ok(())
    } else {
        Err(BudgetError::todo_not_found(id.to_string()))
    }
}

fn print_list(store: &TodoStore) {
    let state = store.state();
    let visible = filtered_todos(state);
    println!("Showing: {}", state.filter);
    print!("{}", format_todo_list(&visible, TodoCounts::from_state(state)));
}

/// Handle a todo command
pub fn handle_todo_command(ctx: &AppContext, cmd: TodoCommands) -> BudgetResult<()> {
    let mut store = ctx.todo_store();

    match cmd {
        TodoCommands::Add { text, priority } => {
            let text = require_text(&text, "Todo text")?;
            let priority = match priority {
                Some(p) => parse_priority(&p)?,
                None => ctx.settings.default_priority,
            };

            let id = store.add_todo(text, priority);
            println!("Added todo {}", id);
        }

        TodoCommands::List { filter } => {
            if let Some(filter) = filter {
                store.set_filter(parse_filter(&filter)?);
            }
            print_list(&store);
        }

        TodoCommands::Toggle { id } => {
            let id = TodoId::new(id);
            require_todo(store.state(), id)?;
            store.toggle_todo(id);

            if let Some(todo) = store.state().todos.get(&id) {
                let status = if todo.completed { "done" } else { "not done" };
                println!("Marked todo {} as {}", id, status);
            }
        }

        TodoCommands::Edit { id, text } => {
            let id = TodoId::new(id);
            require_todo(store.state(), id)?;
            let text = require_text(&text, "Todo text")?;
            store.edit_todo(id, text);
            println!("Updated todo {}", id);
        }

        TodoCommands::Delete { id } => {
            let id = TodoId::new(id);
            require_todo(store.state(), id)?;
            store.delete_todo(id);
            println!("Deleted todo {}", id);
        }

        TodoCommands::Clear => {
            let before = store.state().todos.len();
            store.clear_completed();
            let removed = before - store.state().todos.len();
            println!("Cleared {} completed todo(s)", removed);
        }

        TodoCommands::Filter { filter } => {
            let filter = parse_filter(&filter)?;
            store.set_filter(filter);
            println!("Showing {} todos", filter);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BudgetPaths, Settings};
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir) -> AppContext {
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        AppContext::new(paths, Settings::default()).unwrap()
    }

    fn add(ctx: &AppContext, text: &str) -> TodoId {
        handle_todo_command(
            ctx,
            TodoCommands::Add {
                text: text.into(),
                priority: None,
            },
        )
        .unwrap();
        ctx.todo_store().state().max_id().unwrap()
    }

    #[test]
    fn test_todo_lifecycle() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        let first = add(&ctx, "Buy milk");
        let second = add(&ctx, "Write essay");
        assert!(second > first);

        handle_todo_command(&ctx, TodoCommands::Toggle { id: first.value() }).unwrap();
        handle_todo_command(
            &ctx,
            TodoCommands::Edit {
                id: second.value(),
                text: " Write history essay ".into(),
            },
        )
        .unwrap();

        let state = ctx.todo_store().into_state();
        assert!(state.todos.get(&first).unwrap().completed);
        assert_eq!(state.todos.get(&second).unwrap().text, "Write history essay");
        assert_eq!(state.todos.get(&second).unwrap().priority, Priority::Medium);

        handle_todo_command(&ctx, TodoCommands::Clear).unwrap();
        let state = ctx.todo_store().into_state();
        assert_eq!(state.todos.len(), 1);
        assert!(!state.todos.contains(&first));
    }

    #[test]
    fn test_filter_is_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        handle_todo_command(
            &ctx,
            TodoCommands::Filter {
                filter: "completed".into(),
            },
        )
        .unwrap();
        assert_eq!(ctx.todo_store().state().filter, TodoFilter::Completed);

        let err = handle_todo_command(
            &ctx,
            TodoCommands::Filter {
                filter: "done".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ctx.todo_store().state().filter, TodoFilter::Completed);
    }

    #[test]
    fn test_missing_todo_and_blank_text() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        assert!(handle_todo_command(&ctx, TodoCommands::Toggle { id: 42 })
            .unwrap_err()
            .is_not_found());

        let id = add(&ctx, "Read chapter 3");
        let err = handle_todo_command(
            &ctx,
            TodoCommands::Edit {
                id: id.value(),
                text: "   ".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
