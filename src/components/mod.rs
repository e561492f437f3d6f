//! UI Components
//!
//! Leptos components making up the todo widget.

mod new_todo_form;
mod todo_list_view;
mod todo_row;

pub use new_todo_form::NewTodoForm;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
