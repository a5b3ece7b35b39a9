//! Business logic layer.
//!
//! Services sit between the MCP tools and the repositories. They own
//! timestamp stamping and turn "no such row" into `None`/`false`.

mod todos;


pub use todos::TodoService;
