// src/kanban/item.rs

use crate::models::Task;

/// Display adapter over a task: the list view only ever sees a title and
/// a subtitle, keeping the storage shape out of the renderer.
pub struct TaskItem<'a> {
    task: &'a Task,
}

impl<'a> TaskItem<'a> {
    pub fn new(task: &'a Task) -> Self {
        Self { task }
    }

    pub fn title(&self) -> &str {
        &self.task.name
    }

    pub fn subtitle(&self) -> &str {
        &self.task.description
    }
}
