//! Billing: module packages, billing cycles, MRR and invoice revenue.
//!
//! Prices are reais as `f64`; cycle prices are per-month figures at the
//! given commitment (the quarterly and annual columns are discounted
//! monthly rates billed for the whole cycle). MRR normalises each
//! subscription's cycle price back to a single month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Billing cycle for one module subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Monthly,
    Quarterly,
    Annual,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
            BillingCycle::Annual => "annual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Mensal",
            BillingCycle::Quarterly => "Trimestral",
            BillingCycle::Annual => "Anual",
        }
    }

    /// Months covered by one billed cycle.
    pub fn months(&self) -> f64 {
        match self {
            BillingCycle::Monthly => 1.0,
            BillingCycle::Quarterly => 3.0,
            BillingCycle::Annual => 12.0,
        }
    }
}

/// A sellable product module (CRM WhatsApp, ERP, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductModule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub active: bool,
}

/// A package tier within a module, with one price per billing cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub module_id: String,
    pub name: String,
    pub description: String,
    pub monthly_price: f64,
    pub quarterly_price: f64,
    pub annual_price: f64,
    /// -1 means unlimited
    pub max_users: i32,
}

impl Package {
    pub fn cycle_price(&self, cycle: BillingCycle) -> f64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Quarterly => self.quarterly_price,
            BillingCycle::Annual => self.annual_price,
        }
    }
}

/// One module a company is subscribed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub module_id: String,
    pub package_id: String,
    pub cycle: BillingCycle,
}

/// Company account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    Active,
    Trial,
    Overdue,
    Suspended,
}

impl CompanyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CompanyStatus::Active => "Ativa",
            CompanyStatus::Trial => "Trial",
            CompanyStatus::Overdue => "Inadimplente",
            CompanyStatus::Suspended => "Suspensa",
        }
    }
}

/// A tenant company and its module subscriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub status: CompanyStatus,
    pub subscriptions: Vec<Subscription>,
    pub total_users: u32,
}

/// Find a package price, treating unknown package ids as zero. Mirrors the
/// lookup the rest of billing expects: a dangling subscription contributes
/// nothing rather than failing the whole summary.
pub fn package_price(packages: &[Package], package_id: &str, cycle: BillingCycle) -> f64 {
    packages
        .iter()
        .find(|p| p.id == package_id)
        .map(|p| p.cycle_price(cycle))
        .unwrap_or(0.0)
}

/// Monthly recurring revenue for a subscription list: each cycle price
/// divided by the months it covers, summed.
pub fn monthly_recurring(subscriptions: &[Subscription], packages: &[Package]) -> f64 {
    subscriptions
        .iter()
        .map(|sub| package_price(packages, &sub.package_id, sub.cycle) / sub.cycle.months())
        .sum()
}

/// Invoice status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "paid" => Some(InvoiceStatus::Paid),
            "pending" => Some(InvoiceStatus::Pending),
            "overdue" => Some(InvoiceStatus::Overdue),
            "cancelled" => Some(InvoiceStatus::Cancelled),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Pago",
            InvoiceStatus::Pending => "Pendente",
            InvoiceStatus::Overdue => "Vencido",
            InvoiceStatus::Cancelled => "Cancelado",
        }
    }
}

/// Invoice model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub company_name: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub plan: String,
    pub payment_method: String,
}

/// Revenue totals per invoice status bucket. Cancelled invoices count
/// towards none of the three.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevenueSummary {
    pub paid: f64,
    pub pending: f64,
    pub overdue: f64,
}

pub fn revenue_summary(invoices: &[Invoice]) -> RevenueSummary {
    let mut summary = RevenueSummary::default();
    for invoice in invoices {
        match invoice.status {
            InvoiceStatus::Paid => summary.paid += invoice.amount,
            InvoiceStatus::Pending => summary.pending += invoice.amount,
            InvoiceStatus::Overdue => summary.overdue += invoice.amount,
            InvoiceStatus::Cancelled => {}
        }
    }
    summary
}

/// Invoice list filtering: case-insensitive substring over company name or
/// invoice id, plus an optional status selector. Same composition rule as
/// board filters.
pub fn filter_invoices<'a>(
    invoices: &'a [Invoice],
    query: &str,
    status: Option<InvoiceStatus>,
) -> Vec<&'a Invoice> {
    let needle = query.to_lowercase();
    invoices
        .iter()
        .filter(|invoice| {
            let text_ok = needle.is_empty()
                || invoice.company_name.to_lowercase().contains(&needle)
                || invoice.id.to_lowercase().contains(&needle);
            let status_ok = status.map(|s| invoice.status == s).unwrap_or(true);
            text_ok && status_ok
        })
        .collect()
}
