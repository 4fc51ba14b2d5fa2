// src/task.rs

use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::models::{Message, Task, TaskList};
use crate::repository::RepositoryError;

/// Mounts the versioned task resource: GET/POST/PUT/DELETE /v1/tasks.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1").service(
            web::scope("/tasks")
                .route("", web::get().to(list_tasks))
                .route("", web::post().to(create_task))
                .route("", web::put().to(update_task))
                .route("", web::delete().to(delete_task)),
        ),
    );
}

/// GET /v1/tasks
/// List every task, wrapped in a `{"data": [...]}` envelope.
pub async fn list_tasks(data: web::Data<AppState>) -> impl Responder {
    let repository = &data.repository;

    // Schema-ensure on every list; idempotent.
    if let Err(e) = repository.migrate().await {
        error!("Error ensuring schema: {}", e);
        return HttpResponse::InternalServerError().body("Error listing tasks");
    }

    match repository.all().await {
        Ok(tasks) => HttpResponse::Ok().json(TaskList { data: tasks }),
        Err(e) => {
            error!("Error listing tasks: {}", e);
            HttpResponse::InternalServerError().body("Error listing tasks")
        }
    }
}

/// POST /v1/tasks
/// Create a task. A caller-supplied external key is kept when it parses
/// as a UUID; otherwise a fresh v4 key is assigned.
pub async fn create_task(
    data: web::Data<AppState>,
    payload: web::Json<Task>,
) -> impl Responder {
    let mut task = payload.into_inner();
    if Uuid::parse_str(&task.uuid).is_err() {
        task.uuid = Uuid::new_v4().to_string();
    }

    match data.repository.create(task).await {
        Ok(created) => {
            info!("Task created: {}", created.uuid);
            HttpResponse::Ok().json(created)
        }
        Err(e @ RepositoryError::DuplicateKey) => HttpResponse::BadRequest().json(Message {
            message: e.to_string(),
        }),
        Err(e) => {
            error!("Error inserting task: {}", e);
            HttpResponse::InternalServerError().body("Error inserting task")
        }
    }
}

/// PUT /v1/tasks
/// Update the task matching the body's external key. Only name,
/// description, and the completion flag are persisted.
pub async fn update_task(
    data: web::Data<AppState>,
    payload: web::Json<Task>,
) -> impl Responder {
    let task = payload.into_inner();

    match data.repository.update(&task).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e @ RepositoryError::UpdateFailed(_)) => HttpResponse::BadRequest().json(Message {
            message: e.to_string(),
        }),
        Err(e) => {
            error!("Error updating task: {}", e);
            HttpResponse::InternalServerError().body("Error updating task")
        }
    }
}

/// DELETE /v1/tasks
/// Delete the task matching the body's external key.
pub async fn delete_task(
    data: web::Data<AppState>,
    payload: web::Json<Task>,
) -> impl Responder {
    let task = payload.into_inner();

    match data.repository.delete(&task).await {
        Ok(()) => {
            info!("Task deleted: {}", task.uuid);
            HttpResponse::Ok().json(Message { message: true })
        }
        Err(e @ RepositoryError::DeleteFailed(_)) => HttpResponse::BadRequest().json(Message {
            message: e.to_string(),
        }),
        Err(e) => {
            error!("Error deleting task: {}", e);
            HttpResponse::InternalServerError().body("Error deleting task")
        }
    }
}
