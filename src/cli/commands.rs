use crate::agenda::CalendarView;
use crate::billing::{filter_invoices, revenue_summary, InvoiceStatus};
use crate::board::{apply_transition, compute_buckets, contains_id, BoardItem};
use crate::cli::error::{user_error, validate_non_empty};
use crate::cli::output;
use crate::filter::{AssigneeFilter, BoardFilter};
use crate::models::{
    assignees, parse_status, stages, BoardStatus, Lead, LeadScore, Priority, Task,
};
use crate::seed;
use crate::sync::{InstantSync, SyncProvider};
use crate::utils::parse_date_arg;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "funil")]
#[command(about = "CRM pipeline board for the terminal - lead funnel, task kanban, billing and agenda")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Which board a command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoardKind {
    Leads,
    Tasks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Month,
    Week,
    Day,
}

impl From<ViewArg> for CalendarView {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Month => CalendarView::Month,
            ViewArg::Week => CalendarView::Week,
            ViewArg::Day => CalendarView::Day,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the lead funnel board
    Leads {
        /// Text filter over name and phone (case-insensitive substring)
        #[arg(long, short = 'q')]
        query: Option<String>,
        /// Only show leads assigned to this responsible ("all" for everyone)
        #[arg(long, short = 'a')]
        assignee: Option<String>,
        /// Load the lead collection from a JSON snapshot instead of the seed
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output the buckets as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the project task board
    Tasks {
        /// Text filter over title and description
        #[arg(long, short = 'q')]
        query: Option<String>,
        /// Only show tasks assigned to this person ("all" for everyone)
        #[arg(long, short = 'a')]
        assignee: Option<String>,
        /// Only show tasks with this priority (baixa, media, alta, urgente)
        #[arg(long, short = 'p')]
        priority: Option<String>,
        /// Load the task collection from a JSON snapshot instead of the seed
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output the buckets as JSON
        #[arg(long)]
        json: bool,
    },
    /// Move an entity to another stage (drag-and-drop equivalent)
    Move {
        /// Which board to operate on
        board: BoardKind,
        /// Entity id
        id: String,
        /// Target stage id
        stage: String,
        /// Load the collection from a JSON snapshot instead of the seed
        #[arg(long)]
        file: Option<PathBuf>,
        /// Write the replacement collection to this snapshot file
        #[arg(long)]
        out: Option<PathBuf>,
        /// Output the replacement collection as JSON instead of the board
        #[arg(long)]
        json: bool,
    },
    /// Create a new entity and show the resulting board
    New {
        #[command(subcommand)]
        entity: NewEntity,
    },
    /// List a board's stages in order
    Stages {
        /// Which board to list
        board: BoardKind,
    },
    /// Show the team directory and who currently holds board items
    Team,
    /// Billing reports
    Billing {
        #[command(subcommand)]
        subcommand: BillingCommands,
    },
    /// Show the agenda calendar
    Agenda {
        /// Calendar layout
        #[arg(long, value_enum, default_value = "month")]
        view: ViewArg,
        /// Focus date (YYYY-MM-DD, today, tomorrow, yesterday)
        #[arg(long)]
        date: Option<String>,
        /// Run a calendar sync pass before rendering
        #[arg(long)]
        sync: bool,
    },
}

#[derive(Subcommand)]
pub enum NewEntity {
    /// Create a lead entering the funnel at "novo"
    Lead {
        /// Lead name
        name: String,
        /// Contact phone
        #[arg(long, default_value = "")]
        phone: String,
        /// Responsible person
        #[arg(long, default_value = "")]
        assignee: String,
        /// Budget value in reais
        #[arg(long, default_value_t = 0.0)]
        budget: f64,
        /// Lead score (quente, morno, frio)
        #[arg(long)]
        score: Option<String>,
        /// Tags (repeatable)
        #[arg(long)]
        tag: Vec<String>,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
        /// Load the lead collection from a JSON snapshot instead of the seed
        #[arg(long)]
        file: Option<PathBuf>,
        /// Write the replacement collection to this snapshot file
        #[arg(long)]
        out: Option<PathBuf>,
        /// Output the replacement collection as JSON instead of the board
        #[arg(long)]
        json: bool,
    },
    /// Create a task in the backlog
    Task {
        /// Task title
        title: String,
        /// Task description
        #[arg(long, default_value = "")]
        description: String,
        /// Assigned person
        #[arg(long, default_value = "")]
        assignee: String,
        /// Priority (baixa, media, alta, urgente)
        #[arg(long)]
        priority: Option<String>,
        /// Due date (YYYY-MM-DD, today, tomorrow)
        #[arg(long)]
        due: Option<String>,
        /// Estimated hours
        #[arg(long, default_value_t = 0)]
        estimated: u32,
        /// Load the task collection from a JSON snapshot instead of the seed
        #[arg(long)]
        file: Option<PathBuf>,
        /// Write the replacement collection to this snapshot file
        #[arg(long)]
        out: Option<PathBuf>,
        /// Output the replacement collection as JSON instead of the board
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum BillingCommands {
    /// Module and package catalog with per-cycle prices
    Catalog,
    /// Per-company MRR, normalised across billing cycles
    Mrr,
    /// Invoice list with revenue summary
    Invoices {
        /// Only show invoices with this status (paid, pending, overdue, cancelled)
        #[arg(long, short = 's')]
        status: Option<String>,
        /// Text filter over company name and invoice id
        #[arg(long, short = 'q')]
        query: Option<String>,
    },
}

/// Load a collection from a snapshot file, or fall back to the seed.
fn load_collection<T: DeserializeOwned>(
    file: &Option<PathBuf>,
    fallback: fn() -> Vec<T>,
) -> Result<Vec<T>> {
    match file {
        Some(path) => seed::load_snapshot(path),
        None => Ok(fallback()),
    }
}

fn board_filter(query: &Option<String>, assignee: &Option<String>) -> BoardFilter {
    BoardFilter {
        query: query.clone().unwrap_or_default(),
        assignee: AssigneeFilter::from_arg(assignee.as_deref()),
    }
}

/// Buckets as a JSON object keyed by stage id, in stage order.
fn buckets_json<T: BoardItem + Serialize>(items: &[T], filter: &BoardFilter) -> Result<String> {
    let mut map = serde_json::Map::new();
    for bucket in compute_buckets(items, filter) {
        map.insert(
            bucket.stage.status.as_str().to_string(),
            serde_json::to_value(&bucket.items)?,
        );
    }
    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(map))?)
}

fn emit_replacement<T: Serialize>(
    items: &[T],
    out: &Option<PathBuf>,
    json: bool,
    render: impl Fn() -> String,
) -> Result<()> {
    if let Some(path) = out {
        seed::save_snapshot(Path::new(path), items)?;
        debug!("wrote replacement snapshot to {}", path.display());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        print!("{}", render());
    }
    Ok(())
}

fn handle_leads(
    query: Option<String>,
    assignee: Option<String>,
    file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let leads = load_collection(&file, seed::sample_leads)?;
    let filter = board_filter(&query, &assignee);
    debug!("aggregating {} leads with {:?}", leads.len(), filter);

    if json {
        println!("{}", buckets_json(&leads, &filter)?);
    } else {
        let buckets = compute_buckets(&leads, &filter);
        print!("{}", output::format_lead_board(&buckets, output::use_color()));
    }
    Ok(())
}

fn handle_tasks(
    query: Option<String>,
    assignee: Option<String>,
    priority: Option<String>,
    file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let mut tasks = load_collection(&file, seed::sample_tasks)?;

    // Priority is a task-only axis, applied before board aggregation
    if let Some(arg) = priority.as_deref() {
        if !arg.eq_ignore_ascii_case("all") {
            let wanted = Priority::from_str(arg).unwrap_or_else(|| {
                user_error(&format!(
                    "unknown priority '{}' (expected one of: baixa, media, alta, urgente)",
                    arg
                ))
            });
            tasks.retain(|t| t.priority == wanted);
        }
    }

    let filter = board_filter(&query, &assignee);
    if json {
        println!("{}", buckets_json(&tasks, &filter)?);
    } else {
        let buckets = compute_buckets(&tasks, &filter);
        let today = chrono::Local::now().date_naive();
        print!(
            "{}",
            output::format_task_board(&buckets, today, output::use_color())
        );
    }
    Ok(())
}

fn move_on_board<T>(
    items: Vec<T>,
    board: &str,
    id: &str,
    stage: &str,
    out: &Option<PathBuf>,
    json: bool,
    render: impl Fn(&[T]) -> String,
) -> Result<()>
where
    T: BoardItem + Clone + Serialize,
{
    let target = match parse_status::<T::Status>(stage) {
        Ok(status) => status,
        Err(e) => user_error(&e.to_string()),
    };

    // The core treats a missing id as a no-op; the shell is where the user
    // gets told about it.
    if !contains_id(&items, id) {
        eprintln!("Warning: no entity with id '{}' on the {} board; nothing moved.", id, board);
    }

    let moved = apply_transition(&items, id, target);
    emit_replacement(&moved, out, json, || render(&moved))
}

fn handle_move(
    board: BoardKind,
    id: String,
    stage: String,
    file: Option<PathBuf>,
    out: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    match board {
        BoardKind::Leads => {
            let leads: Vec<Lead> = load_collection(&file, seed::sample_leads)?;
            // Moving a closed sale back into the funnel is legal but worth
            // flagging
            if let Ok(target) = parse_status::<crate::models::LeadStatus>(&stage) {
                if let Some(lead) = leads.iter().find(|l| l.id == id) {
                    if lead.status.is_terminal() && !target.is_terminal() {
                        eprintln!(
                            "Note: reopening '{}' out of terminal stage '{}'.",
                            lead.name,
                            lead.status.label()
                        );
                    }
                }
            }
            move_on_board(leads, "leads", &id, &stage, &out, json, |items| {
                let buckets = compute_buckets(items, &BoardFilter::default());
                output::format_lead_board(&buckets, output::use_color())
            })
        }
        BoardKind::Tasks => {
            let tasks: Vec<Task> = load_collection(&file, seed::sample_tasks)?;
            move_on_board(tasks, "tasks", &id, &stage, &out, json, |items| {
                let buckets = compute_buckets(items, &BoardFilter::default());
                let today = chrono::Local::now().date_naive();
                output::format_task_board(&buckets, today, output::use_color())
            })
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_new_lead(
    name: String,
    phone: String,
    assignee: String,
    budget: f64,
    score: Option<String>,
    tags: Vec<String>,
    notes: String,
    file: Option<PathBuf>,
    out: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    if let Err(e) = validate_non_empty(&name, "Lead name") {
        user_error(&e);
    }

    let mut lead = Lead::new(name, phone, assignee);
    lead.budget_value = budget;
    lead.tags = tags;
    lead.notes = notes;
    if let Some(arg) = score.as_deref() {
        lead.lead_score = LeadScore::from_str(arg).unwrap_or_else(|| {
            user_error(&format!(
                "unknown score '{}' (expected one of: quente, morno, frio)",
                arg
            ))
        });
    }

    let mut leads: Vec<Lead> = load_collection(&file, seed::sample_leads)?;
    debug!("creating lead {} on a board of {}", lead.id, leads.len());
    leads.push(lead);

    emit_replacement(&leads, &out, json, || {
        let buckets = compute_buckets(&leads, &BoardFilter::default());
        output::format_lead_board(&buckets, output::use_color())
    })
}

#[allow(clippy::too_many_arguments)]
fn handle_new_task(
    title: String,
    description: String,
    assignee: String,
    priority: Option<String>,
    due: Option<String>,
    estimated: u32,
    file: Option<PathBuf>,
    out: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    if let Err(e) = validate_non_empty(&title, "Task title") {
        user_error(&e);
    }

    let mut task = Task::new(title, assignee);
    task.description = description;
    task.estimated_hours = estimated;
    if let Some(arg) = priority.as_deref() {
        task.priority = Priority::from_str(arg).unwrap_or_else(|| {
            user_error(&format!(
                "unknown priority '{}' (expected one of: baixa, media, alta, urgente)",
                arg
            ))
        });
    }
    if let Some(expr) = due.as_deref() {
        task.due_date = Some(parse_date_arg(expr)?);
    }

    let mut tasks: Vec<Task> = load_collection(&file, seed::sample_tasks)?;
    tasks.push(task);

    emit_replacement(&tasks, &out, json, || {
        let buckets = compute_buckets(&tasks, &BoardFilter::default());
        let today = chrono::Local::now().date_naive();
        output::format_task_board(&buckets, today, output::use_color())
    })
}

fn handle_stages(board: BoardKind) {
    let text = match board {
        BoardKind::Leads => output::format_stage_table(&stages::<crate::models::LeadStatus>()),
        BoardKind::Tasks => output::format_stage_table(&stages::<crate::models::TaskStatus>()),
    };
    print!("{}", text);
}

fn handle_team() {
    let team = seed::sample_team();
    let leads = seed::sample_leads();
    let tasks = seed::sample_tasks();
    let active = assignees(
        leads
            .iter()
            .map(|l| l.responsible.as_str())
            .chain(tasks.iter().map(|t| t.assigned_to.as_str())),
    );
    print!("{}", output::format_team_table(&team, &active));
}

fn handle_billing(subcommand: BillingCommands) {
    match subcommand {
        BillingCommands::Catalog => {
            let modules = seed::sample_modules();
            let packages = seed::sample_packages();
            print!(
                "{}",
                output::format_catalog_table(&modules, &packages, output::use_color())
            );
        }
        BillingCommands::Mrr => {
            let companies = seed::sample_companies();
            let packages = seed::sample_packages();
            print!(
                "{}",
                output::format_mrr_table(&companies, &packages, output::use_color())
            );
        }
        BillingCommands::Invoices { status, query } => {
            let wanted = status.as_deref().map(|arg| {
                InvoiceStatus::from_str(arg).unwrap_or_else(|| {
                    user_error(&format!(
                        "unknown invoice status '{}' (expected one of: paid, pending, overdue, cancelled)",
                        arg
                    ))
                })
            });
            let invoices = seed::sample_invoices();
            // Totals cover the whole ledger; the filter only narrows the table
            let summary = revenue_summary(&invoices);
            let shown = filter_invoices(&invoices, query.as_deref().unwrap_or(""), wanted);
            print!(
                "{}",
                output::format_invoice_table(&shown, &summary, output::use_color())
            );
        }
    }
}

fn handle_agenda(view: ViewArg, date: Option<String>, sync: bool) -> Result<()> {
    let focus = match date.as_deref() {
        Some(expr) => parse_date_arg(expr)?,
        None => chrono::Local::now().date_naive(),
    };
    let events = seed::sample_events();

    if sync {
        let outcome = InstantSync::default().sync(&events)?;
        println!(
            "Sincronizado com {} ({} eventos) em {}",
            outcome.provider,
            outcome.events_synced,
            outcome.synced_at.format("%Y-%m-%d %H:%M")
        );
    }

    print!(
        "{}",
        output::format_calendar(view.into(), focus, &events, output::use_color())
    );
    Ok(())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Leads {
            query,
            assignee,
            file,
            json,
        } => handle_leads(query, assignee, file, json),
        Commands::Tasks {
            query,
            assignee,
            priority,
            file,
            json,
        } => handle_tasks(query, assignee, priority, file, json),
        Commands::Move {
            board,
            id,
            stage,
            file,
            out,
            json,
        } => handle_move(board, id, stage, file, out, json),
        Commands::New { entity } => match entity {
            NewEntity::Lead {
                name,
                phone,
                assignee,
                budget,
                score,
                tag,
                notes,
                file,
                out,
                json,
            } => handle_new_lead(name, phone, assignee, budget, score, tag, notes, file, out, json),
            NewEntity::Task {
                title,
                description,
                assignee,
                priority,
                due,
                estimated,
                file,
                out,
                json,
            } => handle_new_task(
                title,
                description,
                assignee,
                priority,
                due,
                estimated,
                file,
                out,
                json,
            ),
        },
        Commands::Stages { board } => {
            handle_stages(board);
            Ok(())
        }
        Commands::Team => {
            handle_team();
            Ok(())
        }
        Commands::Billing { subcommand } => {
            handle_billing(subcommand);
            Ok(())
        }
        Commands::Agenda { view, date, sync } => handle_agenda(view, date, sync),
    }
}
