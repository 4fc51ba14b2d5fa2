pub mod task;

pub use task::{Message, Task, TaskList};
