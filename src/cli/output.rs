// Output formatting utilities

use crate::agenda::{
    events_on, month_grid, range_label, week_days, Appointment, CalendarView, WEEKDAYS_SHORT,
};
use crate::billing::{
    monthly_recurring, Company, Invoice, Package, ProductModule, RevenueSummary,
};
use crate::board::Bucket;
use crate::models::{
    BoardStatus, Lead, LeadScore, LeadStatus, Priority, Stage, Task, TaskStatus, TeamMember,
};
use chrono::{Datelike, NaiveDate};
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_BLUE: &str = "\x1b[34m";
const ANSI_FG_MAGENTA: &str = "\x1b[35m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";

/// Colors are used only when stdout is a terminal.
pub fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

fn paint(text: &str, color: &str, enable: bool) -> String {
    if enable {
        format!("{}{}{}", color, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Column indicator colors, matching the funnel's visual identity.
fn lead_stage_color(status: LeadStatus) -> &'static str {
    match status {
        LeadStatus::Novo => ANSI_FG_BLUE,
        LeadStatus::Qualificacao => ANSI_FG_YELLOW,
        LeadStatus::Proposta => ANSI_FG_MAGENTA,
        LeadStatus::Concluida => ANSI_FG_GREEN,
        LeadStatus::Perdida => ANSI_FG_RED,
    }
}

fn task_stage_color(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Backlog => ANSI_FG_BRIGHT_BLACK,
        TaskStatus::Todo => ANSI_FG_BLUE,
        TaskStatus::InProgress => ANSI_FG_YELLOW,
        TaskStatus::Done => ANSI_FG_GREEN,
    }
}

fn score_color(score: LeadScore) -> &'static str {
    match score {
        LeadScore::Quente => ANSI_FG_RED,
        LeadScore::Morno => ANSI_FG_YELLOW,
        LeadScore::Frio => ANSI_FG_BLUE,
    }
}

fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::Urgente => ANSI_FG_RED,
        Priority::Alta => ANSI_FG_MAGENTA,
        Priority::Media => ANSI_FG_YELLOW,
        Priority::Baixa => ANSI_FG_GREEN,
    }
}

/// Terminal width, with a sane fallback when not attached to a terminal.
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(100)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else if max > 3 {
        let cut: String = text.chars().take(max - 3).collect();
        format!("{}...", cut)
    } else {
        text.chars().take(max).collect()
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Format reais the Brazilian way: "R$ 5.000" or "R$ 2.214,75".
pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let whole = (cents / 100).unsigned_abs();
    let frac = (cents % 100).unsigned_abs();
    let sign = if cents < 0 { "-" } else { "" };
    if frac == 0 {
        format!("R$ {}{}", sign, group_thousands(whole))
    } else {
        format!("R$ {}{},{:02}", sign, group_thousands(whole), frac)
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Render the lead funnel as stage sections with badge counts.
pub fn format_lead_board(buckets: &[Bucket<Lead>], color: bool) -> String {
    let mut out = String::new();
    let width = term_width();
    let name_width = buckets
        .iter()
        .flat_map(|b| b.items.iter())
        .map(|l| l.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    for bucket in buckets {
        let header = format!("● {} ({})", bucket.stage.label, bucket.count());
        out.push_str(&paint(
            &header,
            lead_stage_color(bucket.stage.status),
            color,
        ));
        out.push('\n');

        for lead in &bucket.items {
            let line = format!(
                "  {}  {}  {}  {}  {}",
                pad(&lead.id, 4),
                pad(&lead.name, name_width),
                pad(&lead.phone, 18),
                pad(&format_brl(lead.budget_value), 10),
                lead.responsible,
            );
            let score = lead.lead_score.as_str();
            let tags = if lead.tags.is_empty() {
                String::new()
            } else {
                format!("  [{}]", lead.tags.join(", "))
            };
            // The whole row, suffix included, must fit the terminal
            let trailing = 2 + score.chars().count() + tags.chars().count();
            out.push_str(&truncate(&line, width.saturating_sub(trailing)));
            out.push_str("  ");
            out.push_str(&paint(score, score_color(lead.lead_score), color));
            if !tags.is_empty() {
                out.push_str(&paint(&tags, ANSI_FG_BRIGHT_BLACK, color));
            }
            out.push('\n');
        }
        if bucket.items.is_empty() {
            out.push_str(&paint("  (vazio)\n", ANSI_FG_BRIGHT_BLACK, color));
        }
        out.push('\n');
    }
    out
}

/// Render the task kanban. Overdue tasks are flagged with `!`.
pub fn format_task_board(buckets: &[Bucket<Task>], today: NaiveDate, color: bool) -> String {
    let mut out = String::new();
    let width = term_width();
    let title_width = buckets
        .iter()
        .flat_map(|b| b.items.iter())
        .map(|t| t.title.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    for bucket in buckets {
        let header = format!("● {} ({})", bucket.stage.label, bucket.count());
        out.push_str(&paint(
            &header,
            task_stage_color(bucket.stage.status),
            color,
        ));
        out.push('\n');

        for task in &bucket.items {
            let due = match task.due_date {
                Some(d) if task.is_overdue(today) => format!("{} !", d),
                Some(d) => d.to_string(),
                None => "-".to_string(),
            };
            let line = format!(
                "  {}  {}  {}  {}h/{}h  {}",
                pad(&task.id, 4),
                pad(&task.title, title_width),
                pad(&task.assigned_to, 16),
                task.spent_hours,
                task.estimated_hours,
                due,
            );
            let badge = task.priority.label();
            let trailing = 2 + badge.chars().count();
            out.push_str(&truncate(&line, width.saturating_sub(trailing)));
            out.push_str("  ");
            out.push_str(&paint(badge, priority_color(task.priority), color));
            out.push('\n');
        }
        if bucket.items.is_empty() {
            out.push_str(&paint("  (vazio)\n", ANSI_FG_BRIGHT_BLACK, color));
        }
        out.push('\n');
    }
    out
}

/// List a board's stage registry in order.
pub fn format_stage_table<S: BoardStatus>(registry: &[Stage<S>]) -> String {
    let mut out = String::from("ORDER  ID            LABEL\n");
    for stage in registry {
        out.push_str(&format!(
            "{:>5}  {}  {}\n",
            stage.order,
            pad(stage.status.as_str(), 12),
            stage.label
        ));
    }
    out
}

/// Team directory with avatar-style initials. Members whose name appears on
/// a board are listed again in the footer.
pub fn format_team_table(team: &[TeamMember], active: &[String]) -> String {
    let name_width = team
        .iter()
        .map(|m| m.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let email_width = team
        .iter()
        .map(|m| m.email.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut out = format!(
        "SIGLA  {}  {}  FUNÇÃO\n",
        pad("NOME", name_width),
        pad("EMAIL", email_width),
    );
    for member in team {
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            pad(&member.initials(), 5),
            pad(&member.name, name_width),
            pad(&member.email, email_width),
            member.role,
        ));
    }
    if !active.is_empty() {
        out.push('\n');
        out.push_str(&format!("Com itens no quadro: {}\n", active.join(", ")));
    }
    out
}

/// Per-company MRR table with a grand total.
pub fn format_mrr_table(companies: &[Company], packages: &[Package], color: bool) -> String {
    let name_width = companies
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut out = format!(
        "{}  {}  {}  MRR\n",
        pad("EMPRESA", name_width),
        pad("STATUS", 12),
        pad("MÓDULOS", 7),
    );
    let mut total = 0.0;
    for company in companies {
        let mrr = monthly_recurring(&company.subscriptions, packages);
        total += mrr;
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            pad(&company.name, name_width),
            pad(company.status.label(), 12),
            pad(&company.subscriptions.len().to_string(), 7),
            format_brl(mrr),
        ));
    }
    out.push('\n');
    let total_line = format!("Total MRR: {}", format_brl(total));
    out.push_str(&paint(&total_line, ANSI_BOLD, color));
    out.push('\n');
    out
}

/// Module and package catalog: one section per product module, each package
/// with its per-cycle monthly rates. Inactive modules render dimmed.
pub fn format_catalog_table(
    modules: &[ProductModule],
    packages: &[Package],
    color: bool,
) -> String {
    let mut out = String::new();
    for module in modules {
        let header = if module.active {
            format!("● {}", module.name)
        } else {
            format!("● {} (inativo)", module.name)
        };
        let header_color = if module.active {
            ANSI_BOLD
        } else {
            ANSI_FG_BRIGHT_BLACK
        };
        out.push_str(&paint(&header, header_color, color));
        out.push('\n');
        out.push_str(&format!("  {}\n", module.description));

        for pkg in packages.iter().filter(|p| p.module_id == module.id) {
            let users = if pkg.max_users < 0 {
                "usuários ilimitados".to_string()
            } else {
                format!("até {} usuários", pkg.max_users)
            };
            out.push_str(&format!(
                "  {}  {}/mês  {}/mês trimestral  {}/mês anual  {}\n",
                pad(&pkg.name, 12),
                format_brl(pkg.monthly_price),
                format_brl(pkg.quarterly_price),
                format_brl(pkg.annual_price),
                users,
            ));
        }
        out.push('\n');
    }
    out
}

/// Invoice table plus the revenue summary footer.
pub fn format_invoice_table(
    invoices: &[&Invoice],
    summary: &RevenueSummary,
    color: bool,
) -> String {
    let name_width = invoices
        .iter()
        .map(|i| i.company_name.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut out = format!(
        "ID       {}  {}  {}  VENCIMENTO\n",
        pad("EMPRESA", name_width),
        pad("VALOR", 12),
        pad("STATUS", 10),
    );
    for invoice in invoices {
        let status_color = match invoice.status {
            crate::billing::InvoiceStatus::Paid => ANSI_FG_GREEN,
            crate::billing::InvoiceStatus::Pending => ANSI_FG_BLUE,
            crate::billing::InvoiceStatus::Overdue => ANSI_FG_RED,
            crate::billing::InvoiceStatus::Cancelled => ANSI_FG_BRIGHT_BLACK,
        };
        out.push_str(&format!(
            "{}  {}  {}  {}  {}\n",
            pad(&invoice.id, 7),
            pad(&invoice.company_name, name_width),
            pad(&format_brl(invoice.amount), 12),
            paint(&pad(invoice.status.label(), 10), status_color, color),
            invoice.due_date,
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "Recebido: {}   Pendente: {}   Vencido: {}\n",
        paint(&format_brl(summary.paid), ANSI_FG_GREEN, color),
        paint(&format_brl(summary.pending), ANSI_FG_BLUE, color),
        paint(&format_brl(summary.overdue), ANSI_FG_RED, color),
    ));
    out
}

/// Render the agenda for one view of the focus date.
pub fn format_calendar(
    view: CalendarView,
    focus: NaiveDate,
    events: &[Appointment],
    color: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&paint(&range_label(focus, view), ANSI_BOLD, color));
    out.push('\n');

    match view {
        CalendarView::Month => {
            for name in WEEKDAYS_SHORT {
                out.push_str(&format!("{:>5}", name));
            }
            out.push('\n');
            for (i, day) in month_grid(focus).iter().enumerate() {
                let count = events_on(events, *day).len();
                let cell = if count > 0 {
                    format!("{:>3}*{}", day.day(), count)
                } else {
                    format!("{:>3}  ", day.day())
                };
                if day.month() == focus.month() {
                    out.push_str(&cell);
                } else {
                    out.push_str(&paint(&cell, ANSI_FG_BRIGHT_BLACK, color));
                }
                if i % 7 == 6 {
                    out.push('\n');
                }
            }
        }
        CalendarView::Week => {
            for day in week_days(focus) {
                let weekday = WEEKDAYS_SHORT[day.weekday().num_days_from_sunday() as usize];
                out.push_str(&format!("{} {}\n", weekday, day));
                for event in events_on(events, day) {
                    out.push_str(&format!(
                        "    {}  {}  ({})\n",
                        event.time_range(),
                        event.title,
                        event.kind.label()
                    ));
                }
            }
        }
        CalendarView::Day => {
            let day_events = events_on(events, focus);
            if day_events.is_empty() {
                out.push_str("Nenhum evento.\n");
            }
            for event in day_events {
                out.push_str(&format!(
                    "{}  {}  ({})\n",
                    event.time_range(),
                    event.title,
                    event.kind.label()
                ));
                if !event.description.is_empty() {
                    out.push_str(&format!("    {}\n", event.description));
                }
                if let Some(location) = &event.location {
                    out.push_str(&format!("    Local: {}\n", location));
                }
                if !event.attendees.is_empty() {
                    out.push_str(&format!("    Participantes: {}\n", event.attendees.join(", ")));
                }
            }
        }
    }
    out
}
