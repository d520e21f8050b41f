use crate::board::BoardItem;
use crate::models::stage::BoardStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lead funnel status (sales pipeline stage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    Novo,
    Qualificacao,
    Proposta,
    Concluida,
    Perdida,
}

impl BoardStatus for LeadStatus {
    const ALL: &'static [Self] = &[
        LeadStatus::Novo,
        LeadStatus::Qualificacao,
        LeadStatus::Proposta,
        LeadStatus::Concluida,
        LeadStatus::Perdida,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Novo => "novo",
            LeadStatus::Qualificacao => "qualificacao",
            LeadStatus::Proposta => "proposta",
            LeadStatus::Concluida => "concluida",
            LeadStatus::Perdida => "perdida",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        match s {
            "novo" => Some(LeadStatus::Novo),
            "qualificacao" => Some(LeadStatus::Qualificacao),
            "proposta" => Some(LeadStatus::Proposta),
            "concluida" => Some(LeadStatus::Concluida),
            "perdida" => Some(LeadStatus::Perdida),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LeadStatus::Novo => "Novo Lead",
            LeadStatus::Qualificacao => "Qualificação",
            LeadStatus::Proposta => "Proposta Enviada",
            LeadStatus::Concluida => "Venda Concluída",
            LeadStatus::Perdida => "Venda Perdida",
        }
    }
}

impl LeadStatus {
    /// Terminal stages end the funnel; the board still allows moving out of
    /// them (manual override).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Concluida | Self::Perdida)
    }
}

/// Lead temperature score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadScore {
    Quente,
    Morno,
    Frio,
}

impl LeadScore {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadScore::Quente => "quente",
            LeadScore::Morno => "morno",
            LeadScore::Frio => "frio",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "quente" => Some(LeadScore::Quente),
            "morno" => Some(LeadScore::Morno),
            "frio" => Some(LeadScore::Frio),
            _ => None,
        }
    }
}

/// Lead model
///
/// Everything past `responsible` is opaque payload to the board core: carried
/// through transitions untouched, rendered by the CLI only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub status: LeadStatus,
    pub budget_value: f64,
    pub sale_value: Option<f64>,
    pub responsible: String,
    pub tags: Vec<String>,
    pub lead_score: LeadScore,
    pub last_contact: NaiveDate,
    pub notes: String,
}

impl Lead {
    /// Create a new lead entering the funnel at `novo`
    pub fn new(name: String, phone: String, responsible: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            phone,
            status: LeadStatus::Novo,
            budget_value: 0.0,
            sale_value: None,
            responsible,
            tags: Vec::new(),
            lead_score: LeadScore::Morno,
            last_contact: chrono::Local::now().date_naive(),
            notes: String::new(),
        }
    }
}

impl BoardItem for Lead {
    type Status = LeadStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> LeadStatus {
        self.status
    }

    fn set_status(&mut self, status: LeadStatus) {
        self.status = status;
    }

    fn assignee(&self) -> &str {
        &self.responsible
    }

    // Leads are searched by name or phone
    fn search_text(&self) -> String {
        format!("{}\n{}", self.name, self.phone)
    }
}
