//! Prompt templates offered to MCP clients.
//!
//! The message builders are plain functions; `server` registers them with the
//! rmcp prompt router.

use rmcp::model::{GetPromptResult, PromptMessage, PromptMessageRole};
use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};

pub const CREATE_TODO_PROMPT_TITLE: &str = "Create a new Todo Item";
pub const LIST_TODOS_PROMPT_TITLE: &str = "List all Todo Items";

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateTodoPromptArgs {
    #[schemars(description = "Title of the Todo item")]
    pub title: String,
}

pub fn create_todo_message(title: &str) -> String {
    format!("Add this {} as a new todo item.", title)
}

pub fn list_todos_message() -> String {
    "List all the todo items.".to_string()
}

/// Bundle a title and a single user message into a prompt result.
pub fn titled_prompt(title: &str, message: String) -> GetPromptResult {
    GetPromptResult {
        description: Some(title.to_string()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, message)],
    }
}

pub fn create_todo_prompt(args: &CreateTodoPromptArgs) -> GetPromptResult {
    titled_prompt(CREATE_TODO_PROMPT_TITLE, create_todo_message(&args.title))
}

pub fn list_todos_prompt() -> GetPromptResult {
    titled_prompt(LIST_TODOS_PROMPT_TITLE, list_todos_message())
}
