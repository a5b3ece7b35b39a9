//! Tests for prompt templates.

use rmcp::model::{PromptMessageContent, PromptMessageRole};

use super::prompts::{
    CREATE_TODO_PROMPT_TITLE, CreateTodoPromptArgs, LIST_TODOS_PROMPT_TITLE, create_todo_message,
    create_todo_prompt, list_todos_message, list_todos_prompt,
};

fn only_text(result: &rmcp::model::GetPromptResult) -> &str {
    assert_eq!(result.messages.len(), 1);
    assert!(matches!(result.messages[0].role, PromptMessageRole::User));
    match &result.messages[0].content {
        PromptMessageContent::Text { text } => text.as_str(),
        _ => panic!("Expected text content"),
    }
}

#[test]
fn create_todo_message_embeds_title() {
    assert_eq!(
        create_todo_message("Buy milk"),
        "Add this Buy milk as a new todo item."
    );
}

#[test]
fn list_todos_message_is_fixed() {
    assert_eq!(list_todos_message(), "List all the todo items.");
}

#[test]
fn create_todo_prompt_is_titled_user_message() {
    let result = create_todo_prompt(&CreateTodoPromptArgs {
        title: "Buy milk".to_string(),
    });

    assert_eq!(result.description.as_deref(), Some(CREATE_TODO_PROMPT_TITLE));
    assert_eq!(only_text(&result), "Add this Buy milk as a new todo item.");
}

#[test]
fn list_todos_prompt_is_titled_user_message() {
    let result = list_todos_prompt();

    assert_eq!(result.description.as_deref(), Some(LIST_TODOS_PROMPT_TITLE));
    assert_eq!(only_text(&result), "List all the todo items.");
}
