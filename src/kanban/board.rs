// src/kanban/board.rs

use crossterm::event::KeyCode;

use super::client::{ClientError, RemoteTasks};
use crate::models::Task;

pub const TODO: usize = 0;
pub const DONE: usize = 1;

/// One column of the board: a title, an in-memory task list, and the
/// selection cursor within it.
pub struct Board {
    title: String,
    tasks: Vec<Task>,
    selected: usize,
}

impl Board {
    fn new(title: &str, tasks: Vec<Task>) -> Self {
        Self {
            title: title.to_string(),
            tasks,
            selected: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn remove_selected(&mut self) -> Option<Task> {
        if self.tasks.is_empty() {
            return None;
        }
        let task = self.tasks.remove(self.selected);
        if self.selected > 0 && self.selected >= self.tasks.len() {
            self.selected -= 1;
        }
        Some(task)
    }

    fn insert_front(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }
}

/// What the event loop should do after a keypress.
pub enum Flow {
    Continue,
    Quit,
}

/// The whole board: a fixed pair of columns, one of them active, plus
/// the remote the client keeps in sync on every move.
pub struct Kanban<R> {
    boards: Vec<Board>,
    active: usize,
    remote: R,
}

impl<R: RemoteTasks> Kanban<R> {
    /// Fetch the full task list once and partition it by completion flag.
    /// This is the client's only refresh; later remote edits by other
    /// clients are not reflected.
    pub fn connect(remote: R) -> Result<Self, ClientError> {
        let mut todo = Vec::new();
        let mut done = Vec::new();
        for task in remote.fetch_all()? {
            if task.is_done() {
                done.push(task);
            } else {
                todo.push(task);
            }
        }

        Ok(Self {
            boards: vec![Board::new("To Do", todo), Board::new("Done", done)],
            active: TODO,
            remote,
        })
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn focus_left(&mut self) {
        if self.active > 0 {
            self.active -= 1;
        }
    }

    pub fn focus_right(&mut self) {
        if self.active + 1 < self.boards.len() {
            self.active += 1;
        }
    }

    pub fn mark_done(&mut self) -> Result<(), ClientError> {
        self.move_selected(1, DONE)
    }

    pub fn mark_undone(&mut self) -> Result<(), ClientError> {
        self.move_selected(0, TODO)
    }

    /// Route a keypress. A remote failure during a move propagates up and
    /// is fatal to the client.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<Flow, ClientError> {
        match key {
            KeyCode::Char('q') => return Ok(Flow::Quit),
            KeyCode::Char('h') | KeyCode::Left => self.focus_left(),
            KeyCode::Char('l') | KeyCode::Right => self.focus_right(),
            KeyCode::Char('j') | KeyCode::Down => self.boards[self.active].select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.boards[self.active].select_prev(),
            KeyCode::Char('d') => self.mark_done()?,
            KeyCode::Char('u') => self.mark_undone()?,
            _ => {}
        }
        Ok(Flow::Continue)
    }

    /// Set the completion flag on the selected item of the active column,
    /// push the change to the remote, then move the item to the head of
    /// the target column. The move is unconditional with respect to which
    /// column is active; there is no rollback if the item was already
    /// where it belongs. No-op when the active column is empty.
    fn move_selected(&mut self, flag: i64, target: usize) -> Result<(), ClientError> {
        let board = &self.boards[self.active];
        let Some(selected) = board.tasks.get(board.selected) else {
            return Ok(());
        };

        let mut task = selected.clone();
        task.is_finished = flag;
        self.remote.update(&task)?;

        self.boards[self.active].remove_selected();
        self.boards[target].insert_front(task);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// In-memory remote that records every update it is asked to make.
    struct FakeRemote {
        initial: Vec<Task>,
        updates: Rc<RefCell<Vec<Task>>>,
        fail_updates: bool,
    }

    impl FakeRemote {
        fn new(initial: Vec<Task>) -> (Self, Rc<RefCell<Vec<Task>>>) {
            let updates = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    initial,
                    updates: updates.clone(),
                    fail_updates: false,
                },
                updates,
            )
        }
    }

    impl RemoteTasks for FakeRemote {
        fn fetch_all(&self) -> Result<Vec<Task>, ClientError> {
            Ok(self.initial.clone())
        }

        fn update(&self, task: &Task) -> Result<Task, ClientError> {
            if self.fail_updates {
                return Err(ClientError::Rejected {
                    status: 400,
                    message: "update failed".to_string(),
                });
            }
            self.updates.borrow_mut().push(task.clone());
            Ok(task.clone())
        }
    }

    fn task(uuid: &str, name: &str, is_finished: i64) -> Task {
        Task {
            uuid: uuid.to_string(),
            name: name.to_string(),
            is_finished,
            ..Task::default()
        }
    }

    #[test]
    fn connect_partitions_tasks_by_completion_flag() {
        let (remote, _) = FakeRemote::new(vec![
            task("a", "open item", 0),
            task("b", "closed item", 1),
        ]);
        let kanban = Kanban::connect(remote).unwrap();

        assert_eq!(kanban.active(), TODO);
        assert_eq!(kanban.boards()[TODO].tasks().len(), 1);
        assert_eq!(kanban.boards()[TODO].tasks()[0].name, "open item");
        assert_eq!(kanban.boards()[DONE].tasks().len(), 1);
        assert_eq!(kanban.boards()[DONE].tasks()[0].name, "closed item");
    }

    #[test]
    fn mark_done_moves_the_item_and_issues_one_update() {
        let (remote, updates) = FakeRemote::new(vec![
            task("a", "open item", 0),
            task("b", "closed item", 1),
        ]);
        let mut kanban = Kanban::connect(remote).unwrap();

        kanban.mark_done().unwrap();

        assert!(kanban.boards()[TODO].tasks().is_empty());
        assert_eq!(kanban.boards()[DONE].tasks().len(), 2);
        assert_eq!(kanban.boards()[DONE].tasks()[0].name, "open item");
        assert_eq!(kanban.boards()[DONE].tasks()[0].is_finished, 1);

        let recorded = updates.borrow();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].uuid, "a");
        assert_eq!(recorded[0].is_finished, 1);
    }

    #[test]
    fn mark_undone_restores_the_item_to_the_head_of_todo() {
        let (remote, updates) = FakeRemote::new(vec![
            task("a", "open item", 0),
            task("b", "closed item", 1),
        ]);
        let mut kanban = Kanban::connect(remote).unwrap();

        kanban.focus_right();
        kanban.mark_undone().unwrap();

        assert!(kanban.boards()[DONE].tasks().is_empty());
        assert_eq!(kanban.boards()[TODO].tasks().len(), 2);
        assert_eq!(kanban.boards()[TODO].tasks()[0].name, "closed item");
        assert_eq!(kanban.boards()[TODO].tasks()[0].is_finished, 0);
        assert_eq!(updates.borrow().len(), 1);
    }

    #[test]
    fn the_move_is_unconditional_for_the_active_column() {
        // Pressing d while Done is active re-inserts the item at the head
        // of Done rather than rejecting the move.
        let (remote, _) = FakeRemote::new(vec![
            task("a", "first closed", 1),
            task("b", "second closed", 1),
        ]);
        let mut kanban = Kanban::connect(remote).unwrap();

        kanban.focus_right();
        kanban.handle_key(KeyCode::Char('j')).unwrap();
        kanban.mark_done().unwrap();

        let names: Vec<&str> = kanban.boards()[DONE]
            .tasks()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["second closed", "first closed"]);
    }

    #[test]
    fn mark_keys_are_a_no_op_on_an_empty_column() {
        let (remote, updates) = FakeRemote::new(vec![task("b", "closed item", 1)]);
        let mut kanban = Kanban::connect(remote).unwrap();

        kanban.mark_done().unwrap();

        assert!(kanban.boards()[TODO].tasks().is_empty());
        assert_eq!(kanban.boards()[DONE].tasks().len(), 1);
        assert!(updates.borrow().is_empty());
    }

    #[test]
    fn focus_is_a_no_op_at_the_boundaries() {
        let (remote, _) = FakeRemote::new(vec![]);
        let mut kanban = Kanban::connect(remote).unwrap();

        kanban.focus_left();
        assert_eq!(kanban.active(), TODO);

        kanban.focus_right();
        kanban.focus_right();
        assert_eq!(kanban.active(), DONE);
    }

    #[test]
    fn selection_stays_within_the_column() {
        let (remote, _) = FakeRemote::new(vec![
            task("a", "one", 0),
            task("b", "two", 0),
        ]);
        let mut kanban = Kanban::connect(remote).unwrap();

        kanban.handle_key(KeyCode::Char('k')).unwrap();
        assert_eq!(kanban.boards()[TODO].selected(), 0);

        kanban.handle_key(KeyCode::Char('j')).unwrap();
        kanban.handle_key(KeyCode::Char('j')).unwrap();
        assert_eq!(kanban.boards()[TODO].selected(), 1);
    }

    #[test]
    fn selection_is_clamped_after_removing_the_last_item() {
        let (remote, _) = FakeRemote::new(vec![
            task("a", "one", 0),
            task("b", "two", 0),
        ]);
        let mut kanban = Kanban::connect(remote).unwrap();

        kanban.handle_key(KeyCode::Char('j')).unwrap();
        kanban.mark_done().unwrap();

        assert_eq!(kanban.boards()[TODO].selected(), 0);
        assert_eq!(kanban.boards()[TODO].tasks()[0].name, "one");
    }

    #[test]
    fn a_remote_failure_during_a_move_propagates() {
        let (mut remote, _) = FakeRemote::new(vec![task("a", "open item", 0)]);
        remote.fail_updates = true;
        let mut kanban = Kanban::connect(remote).unwrap();

        assert!(kanban.mark_done().is_err());
    }

    #[test]
    fn q_quits_the_loop() {
        let (remote, _) = FakeRemote::new(vec![]);
        let mut kanban = Kanban::connect(remote).unwrap();

        assert!(matches!(
            kanban.handle_key(KeyCode::Char('q')).unwrap(),
            Flow::Quit
        ));
    }
}
