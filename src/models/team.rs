use serde::{Deserialize, Serialize};

/// Team member (assignee directory)
///
/// Boards reference assignees by name and never validate against this list;
/// it exists for display (initials) and for enumerating filter choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl TeamMember {
    /// Avatar-style initials: first letter of each name part, uppercased.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

/// Distinct assignee names present in a collection, in first-seen order.
pub fn assignees<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = Vec::new();
    for name in names {
        if !seen.iter().any(|s| s == name) {
            seen.push(name.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let member = TeamMember {
            id: "1".to_string(),
            name: "Ana Costa".to_string(),
            email: "ana@empresa.com".to_string(),
            role: "Gerente".to_string(),
        };
        assert_eq!(member.initials(), "AC");
    }

    #[test]
    fn test_assignees_dedup_preserves_order() {
        let names = ["Ana Costa", "Carlos Oliveira", "Ana Costa"];
        let distinct = assignees(names);
        assert_eq!(distinct, vec!["Ana Costa", "Carlos Oliveira"]);
    }
}
