// src/kanban/client.rs

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use thiserror::Error;

use crate::models::{Message, Task, TaskList};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status and a message envelope.
    #[error("server rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// The remote store as the board sees it: one fetch at startup, one
/// update per move. Board logic is written against this seam so tests
/// can drive it with a recording fake.
pub trait RemoteTasks {
    fn fetch_all(&self) -> Result<Vec<Task>, ClientError>;
    fn update(&self, task: &Task) -> Result<Task, ClientError>;
}

/// Blocking HTTP implementation against the /v1 task service.
pub struct HttpTasks {
    http: Client,
    base_url: String,
}

impl HttpTasks {
    /// `base_url` includes the version prefix, e.g. `http://127.0.0.1:3000/v1`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn rejected(res: Response) -> ClientError {
        let status = res.status().as_u16();
        let message = res
            .json::<Message<String>>()
            .map(|m| m.message)
            .unwrap_or_else(|_| "unknown error".to_string());
        ClientError::Rejected { status, message }
    }
}

impl RemoteTasks for HttpTasks {
    fn fetch_all(&self) -> Result<Vec<Task>, ClientError> {
        let res = self.http.get(format!("{}/tasks", self.base_url)).send()?;
        if !res.status().is_success() {
            return Err(Self::rejected(res));
        }
        Ok(res.json::<TaskList>()?.data)
    }

    fn update(&self, task: &Task) -> Result<Task, ClientError> {
        let res = self
            .http
            .put(format!("{}/tasks", self.base_url))
            .json(task)
            .send()?;
        if !res.status().is_success() {
            return Err(Self::rejected(res));
        }
        Ok(res.json::<Task>()?)
    }
}
