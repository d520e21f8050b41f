use crate::board::BoardItem;
use crate::models::stage::BoardStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Project task status (kanban column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Backlog,
    Todo,
    InProgress,
    Done,
}

impl BoardStatus for TaskStatus {
    const ALL: &'static [Self] = &[
        TaskStatus::Backlog,
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Done,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Backlog => "backlog",
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        match s {
            "backlog" => Some(TaskStatus::Backlog),
            "todo" => Some(TaskStatus::Todo),
            "in_progress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TaskStatus::Backlog => "Backlog",
            TaskStatus::Todo => "A Fazer",
            TaskStatus::InProgress => "Em Andamento",
            TaskStatus::Done => "Finalizado",
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Baixa,
    Media,
    Alta,
    Urgente,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Baixa => "baixa",
            Priority::Media => "media",
            Priority::Alta => "alta",
            Priority::Urgente => "urgente",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "baixa" => Some(Priority::Baixa),
            "media" => Some(Priority::Media),
            "alta" => Some(Priority::Alta),
            "urgente" => Some(Priority::Urgente),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Baixa => "Baixa",
            Priority::Media => "Média",
            Priority::Alta => "Alta",
            Priority::Urgente => "Urgente",
        }
    }
}

/// Project task model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub assigned_to: String,
    pub estimated_hours: u32,
    pub spent_hours: u32,
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDate,
    pub comments: u32,
    pub attachments: u32,
}

impl Task {
    /// Create a new task in the backlog
    pub fn new(title: String, assigned_to: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            description: String::new(),
            status: TaskStatus::Backlog,
            priority: Priority::Media,
            assigned_to,
            estimated_hours: 0,
            spent_hours: 0,
            due_date: None,
            created_at: chrono::Local::now().date_naive(),
            comments: 0,
            attachments: 0,
        }
    }

    /// A task is overdue when its due date has passed. Tasks without a due
    /// date are never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due < today,
            None => false,
        }
    }
}

impl BoardItem for Task {
    type Status = TaskStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> TaskStatus {
        self.status
    }

    fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    fn assignee(&self) -> &str {
        &self.assigned_to
    }

    // Tasks are searched by title or description
    fn search_text(&self) -> String {
        format!("{}\n{}", self.title, self.description)
    }
}
