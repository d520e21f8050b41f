//! Built-in sample data and JSON snapshot handoff.
//!
//! The boards own no storage. Each command starts from either the built-in
//! sample state below or a snapshot file, and hands the full replacement
//! collection back out (stdout or `--out`) after a mutation.

use crate::agenda::{Appointment, EventKind};
use crate::billing::{
    BillingCycle, Company, CompanyStatus, Invoice, InvoiceStatus, Package, ProductModule,
    Subscription,
};
use crate::models::{Lead, LeadScore, LeadStatus, Priority, Task, TaskStatus, TeamMember};
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn sample_leads() -> Vec<Lead> {
    vec![
        Lead {
            id: "1".to_string(),
            name: "João Silva".to_string(),
            phone: "+55 11 99999-0001".to_string(),
            status: LeadStatus::Novo,
            budget_value: 5000.0,
            sale_value: None,
            responsible: "Ana Costa".to_string(),
            tags: vec!["VIP".to_string(), "Primeira Compra".to_string()],
            lead_score: LeadScore::Quente,
            last_contact: date(2024, 1, 15),
            notes: "Cliente interessado em serviço premium".to_string(),
        },
        Lead {
            id: "2".to_string(),
            name: "Maria Santos".to_string(),
            phone: "+55 11 99999-0002".to_string(),
            status: LeadStatus::Qualificacao,
            budget_value: 8000.0,
            sale_value: None,
            responsible: "Carlos Oliveira".to_string(),
            tags: vec!["Corporativo".to_string()],
            lead_score: LeadScore::Morno,
            last_contact: date(2024, 1, 14),
            notes: "Aguardando aprovação do orçamento".to_string(),
        },
        Lead {
            id: "3".to_string(),
            name: "Pedro Almeida".to_string(),
            phone: "+55 11 99999-0003".to_string(),
            status: LeadStatus::Proposta,
            budget_value: 12000.0,
            sale_value: None,
            responsible: "Ana Costa".to_string(),
            tags: vec!["Enterprise".to_string()],
            lead_score: LeadScore::Quente,
            last_contact: date(2024, 1, 13),
            notes: "Proposta enviada, aguardando retorno".to_string(),
        },
        Lead {
            id: "4".to_string(),
            name: "Carla Ferreira".to_string(),
            phone: "+55 11 99999-0004".to_string(),
            status: LeadStatus::Concluida,
            budget_value: 7500.0,
            sale_value: Some(7500.0),
            responsible: "Carlos Oliveira".to_string(),
            tags: vec!["Recorrente".to_string()],
            lead_score: LeadScore::Quente,
            last_contact: date(2024, 1, 12),
            notes: "Venda concluída com sucesso".to_string(),
        },
    ]
}

pub fn sample_team() -> Vec<TeamMember> {
    let member = |id: &str, name: &str, email: &str, role: &str| TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
    };
    vec![
        member("1", "Ana Costa", "ana@empresa.com", "Gerente"),
        member("2", "Carlos Oliveira", "carlos@empresa.com", "Desenvolvedor"),
        member("3", "Maria Santos", "maria@empresa.com", "Designer"),
        member("4", "Pedro Silva", "pedro@empresa.com", "QA"),
        member("5", "Laura Ferreira", "laura@empresa.com", "Analista"),
    ]
}

pub fn sample_tasks() -> Vec<Task> {
    let task = |id: &str,
                title: &str,
                description: &str,
                status: TaskStatus,
                priority: Priority,
                assigned_to: &str,
                estimated: u32,
                spent: u32,
                due: NaiveDate,
                created: NaiveDate,
                comments: u32,
                attachments: u32| Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        priority,
        assigned_to: assigned_to.to_string(),
        estimated_hours: estimated,
        spent_hours: spent,
        due_date: Some(due),
        created_at: created,
        comments,
        attachments,
    };
    vec![
        task(
            "1",
            "Análise de Requisitos",
            "Levantar todos os requisitos funcionais e não funcionais do sistema",
            TaskStatus::Done,
            Priority::Alta,
            "Ana Costa",
            20,
            18,
            date(2024, 1, 20),
            date(2024, 1, 10),
            3,
            2,
        ),
        task(
            "2",
            "Design da Interface",
            "Criar mockups e protótipos das principais telas do sistema",
            TaskStatus::InProgress,
            Priority::Alta,
            "Maria Santos",
            30,
            15,
            date(2024, 2, 15),
            date(2024, 1, 15),
            1,
            5,
        ),
        task(
            "3",
            "Desenvolvimento Backend",
            "Implementar APIs e lógica de negócio do sistema",
            TaskStatus::Todo,
            Priority::Alta,
            "Carlos Oliveira",
            80,
            0,
            date(2024, 3, 30),
            date(2024, 1, 20),
            0,
            0,
        ),
        task(
            "4",
            "Testes Unitários",
            "Criar e executar testes unitários para garantir qualidade",
            TaskStatus::Backlog,
            Priority::Media,
            "Pedro Silva",
            40,
            0,
            date(2024, 4, 15),
            date(2024, 1, 25),
            0,
            0,
        ),
        task(
            "5",
            "Integração Frontend",
            "Conectar interface com as APIs desenvolvidas",
            TaskStatus::Backlog,
            Priority::Alta,
            "Carlos Oliveira",
            50,
            0,
            date(2024, 4, 30),
            date(2024, 1, 25),
            0,
            0,
        ),
        task(
            "6",
            "Documentação Técnica",
            "Elaborar documentação completa do sistema",
            TaskStatus::Todo,
            Priority::Media,
            "Laura Ferreira",
            25,
            5,
            date(2024, 5, 15),
            date(2024, 2, 1),
            2,
            1,
        ),
    ]
}

pub fn sample_modules() -> Vec<ProductModule> {
    let module = |id: &str, name: &str, description: &str, active: bool| ProductModule {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        active,
    };
    vec![
        module(
            "1",
            "CRM WhatsApp",
            "Módulo de gerenciamento de leads e vendas via WhatsApp",
            true,
        ),
        module("2", "ERP", "Sistema de gestão empresarial completo", true),
        module("3", "PDV", "Ponto de venda e controle de estoque", false),
    ]
}

pub fn sample_packages() -> Vec<Package> {
    let package = |id: &str,
                   module_id: &str,
                   name: &str,
                   description: &str,
                   monthly: f64,
                   quarterly: f64,
                   annual: f64,
                   max_users: i32| Package {
        id: id.to_string(),
        module_id: module_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        monthly_price: monthly,
        quarterly_price: quarterly,
        annual_price: annual,
        max_users,
    };
    vec![
        package(
            "1",
            "1",
            "Básico",
            "Ideal para pequenas empresas começando com WhatsApp",
            297.0,
            267.0,
            237.0,
            3,
        ),
        package(
            "2",
            "1",
            "Pro",
            "Para empresas em crescimento que precisam de mais recursos",
            597.0,
            537.0,
            477.0,
            10,
        ),
        package(
            "3",
            "1",
            "Enterprise",
            "Solução completa para grandes empresas",
            1497.0,
            1347.0,
            1197.0,
            -1,
        ),
        package(
            "4",
            "2",
            "Básico",
            "Gestão básica de vendas e estoque",
            197.0,
            177.0,
            157.0,
            2,
        ),
        package(
            "5",
            "2",
            "Pro",
            "Gestão completa com relatórios avançados",
            397.0,
            357.0,
            317.0,
            8,
        ),
        package(
            "6",
            "2",
            "Enterprise",
            "Solução empresarial com multi-filiais",
            897.0,
            807.0,
            717.0,
            -1,
        ),
    ]
}

pub fn sample_companies() -> Vec<Company> {
    let sub = |module_id: &str, package_id: &str, cycle: BillingCycle| Subscription {
        module_id: module_id.to_string(),
        package_id: package_id.to_string(),
        cycle,
    };
    vec![
        Company {
            id: "1".to_string(),
            name: "TechCorp Ltd".to_string(),
            status: CompanyStatus::Active,
            subscriptions: vec![
                sub("1", "3", BillingCycle::Monthly),
                sub("2", "6", BillingCycle::Annual),
            ],
            total_users: 25,
        },
        Company {
            id: "2".to_string(),
            name: "Digital Solutions".to_string(),
            status: CompanyStatus::Active,
            subscriptions: vec![sub("1", "2", BillingCycle::Quarterly)],
            total_users: 10,
        },
        Company {
            id: "3".to_string(),
            name: "StartupX".to_string(),
            status: CompanyStatus::Trial,
            subscriptions: vec![sub("1", "1", BillingCycle::Monthly)],
            total_users: 3,
        },
        Company {
            id: "4".to_string(),
            name: "E-commerce Plus".to_string(),
            status: CompanyStatus::Overdue,
            subscriptions: vec![
                sub("1", "1", BillingCycle::Monthly),
                sub("2", "4", BillingCycle::Monthly),
            ],
            total_users: 5,
        },
    ]
}

pub fn sample_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "INV-001".to_string(),
            company_name: "TechCorp Ltd".to_string(),
            amount: 2500.0,
            status: InvoiceStatus::Paid,
            due_date: date(2024, 1, 1),
            paid_date: Some(date(2023, 12, 28)),
            plan: "Enterprise".to_string(),
            payment_method: "Credit Card".to_string(),
        },
        Invoice {
            id: "INV-002".to_string(),
            company_name: "Digital Solutions".to_string(),
            amount: 1200.0,
            status: InvoiceStatus::Paid,
            due_date: date(2024, 1, 15),
            paid_date: Some(date(2024, 1, 12)),
            plan: "Pro".to_string(),
            payment_method: "Bank Transfer".to_string(),
        },
        Invoice {
            id: "INV-003".to_string(),
            company_name: "StartupX".to_string(),
            amount: 597.0,
            status: InvoiceStatus::Pending,
            due_date: date(2024, 1, 30),
            paid_date: None,
            plan: "Pro".to_string(),
            payment_method: "Credit Card".to_string(),
        },
        Invoice {
            id: "INV-004".to_string(),
            company_name: "E-commerce Plus".to_string(),
            amount: 450.0,
            status: InvoiceStatus::Overdue,
            due_date: date(2024, 1, 1),
            paid_date: None,
            plan: "Básico".to_string(),
            payment_method: "Bank Transfer".to_string(),
        },
    ]
}

pub fn sample_events() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1".to_string(),
            title: "Reunião com João Silva".to_string(),
            description: "Apresentação da proposta comercial".to_string(),
            date: date(2024, 1, 16),
            start_time: time(14, 0),
            end_time: time(15, 0),
            kind: EventKind::Meeting,
            location: Some("Sala de reuniões".to_string()),
            attendees: vec!["João Silva".to_string(), "Ana Costa".to_string()],
            lead_id: Some("1".to_string()),
            reminder_minutes: 15,
        },
        Appointment {
            id: "2".to_string(),
            title: "Follow-up Maria Santos".to_string(),
            description: "Acompanhamento da proposta enviada".to_string(),
            date: date(2024, 1, 17),
            start_time: time(10, 30),
            end_time: time(11, 0),
            kind: EventKind::Call,
            location: None,
            attendees: vec!["Maria Santos".to_string()],
            lead_id: Some("2".to_string()),
            reminder_minutes: 10,
        },
        Appointment {
            id: "3".to_string(),
            title: "Apresentação Produto".to_string(),
            description: "Demo do produto para Pedro Almeida".to_string(),
            date: date(2024, 1, 18),
            start_time: time(16, 0),
            end_time: time(17, 0),
            kind: EventKind::Presentation,
            location: Some("Google Meet".to_string()),
            attendees: vec!["Pedro Almeida".to_string(), "Equipe Técnica".to_string()],
            lead_id: Some("3".to_string()),
            reminder_minutes: 30,
        },
    ]
}

/// Load a collection snapshot from a JSON file.
pub fn load_snapshot<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse snapshot: {}", path.display()))
}

/// Write a collection snapshot to a JSON file (pretty-printed).
pub fn save_snapshot<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write snapshot: {}", path.display()))
}
