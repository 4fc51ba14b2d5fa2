use crate::repository::TaskRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: TaskRepository,
}
