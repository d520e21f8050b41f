use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn funil() -> Command {
    Command::cargo_bin("funil").unwrap()
}

#[test]
fn test_leads_board_shows_all_stages() {
    funil()
        .args(["leads"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Novo Lead (1)"))
        .stdout(predicate::str::contains("Qualificação (1)"))
        .stdout(predicate::str::contains("Proposta Enviada (1)"))
        .stdout(predicate::str::contains("Venda Concluída (1)"))
        .stdout(predicate::str::contains("Venda Perdida (0)"));
}

#[test]
fn test_leads_board_shows_seed_names_and_budgets() {
    funil()
        .args(["leads"])
        .assert()
        .success()
        .stdout(predicate::str::contains("João Silva"))
        .stdout(predicate::str::contains("Maria Santos"))
        .stdout(predicate::str::contains("R$ 5.000"))
        .stdout(predicate::str::contains("+55 11 99999-0003"));
}

#[test]
fn test_leads_query_filters_by_name() {
    funil()
        .args(["leads", "--query", "maria"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maria Santos"))
        .stdout(predicate::str::contains("Novo Lead (0)"))
        .stdout(predicate::str::contains("Qualificação (1)"));
}

#[test]
fn test_leads_query_matches_phone() {
    funil()
        .args(["leads", "-q", "99999-0004"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Carla Ferreira"))
        .stdout(predicate::str::contains("Venda Concluída (1)"))
        .stdout(predicate::str::contains("Novo Lead (0)"));
}

#[test]
fn test_leads_assignee_filter_composes_with_query() {
    // Ana Costa is responsible for leads 1 and 3; the query keeps only 3.
    funil()
        .args(["leads", "-a", "Ana Costa", "-q", "pedro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Proposta Enviada (1)"))
        .stdout(predicate::str::contains("Novo Lead (0)"));
}

#[test]
fn test_leads_assignee_all_is_no_filter() {
    funil()
        .args(["leads", "--assignee", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("João Silva"))
        .stdout(predicate::str::contains("Carla Ferreira"));
}

#[test]
fn test_leads_json_buckets_keyed_by_stage() {
    let output = funil().args(["leads", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let buckets = value.as_object().unwrap();
    assert_eq!(buckets.len(), 5);
    assert_eq!(buckets["novo"].as_array().unwrap().len(), 1);
    assert_eq!(buckets["perdida"].as_array().unwrap().len(), 0);
    assert_eq!(buckets["novo"][0]["name"], "João Silva");
}

#[test]
fn test_tasks_board_shows_all_stages() {
    funil()
        .args(["tasks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backlog (2)"))
        .stdout(predicate::str::contains("A Fazer (2)"))
        .stdout(predicate::str::contains("Em Andamento (1)"))
        .stdout(predicate::str::contains("Finalizado (1)"));
}

#[test]
fn test_tasks_priority_filter() {
    funil()
        .args(["tasks", "--priority", "media"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Testes Unitários"))
        .stdout(predicate::str::contains("Documentação Técnica"))
        .stdout(predicate::str::contains("Em Andamento (0)"));
}

#[test]
fn test_tasks_unknown_priority_is_user_error() {
    funil()
        .args(["tasks", "--priority", "extrema"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown priority 'extrema'"));
}

#[test]
fn test_move_lead_to_terminal_stage() {
    funil()
        .args(["move", "leads", "1", "concluida"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Novo Lead (0)"))
        .stdout(predicate::str::contains("Venda Concluída (2)"));
}

#[test]
fn test_move_rejects_unknown_stage() {
    funil()
        .args(["move", "leads", "1", "fechado"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown stage 'fechado'"));
}

#[test]
fn test_move_stage_from_other_board_rejected() {
    // "done" is a task stage, not a lead stage.
    funil()
        .args(["move", "leads", "1", "done"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown stage 'done'"));
}

#[test]
fn test_move_out_of_terminal_stage_notes_reopening() {
    // Lead 4 is a closed sale; pulling it back into the funnel is allowed
    // but flagged.
    funil()
        .args(["move", "leads", "4", "novo"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "reopening 'Carla Ferreira' out of terminal stage 'Venda Concluída'",
        ))
        .stdout(predicate::str::contains("Novo Lead (2)"));

    // Terminal-to-terminal moves are not a reopening.
    funil()
        .args(["move", "leads", "4", "perdida"])
        .assert()
        .success()
        .stderr(predicate::str::contains("reopening").not());
}

#[test]
fn test_move_missing_id_warns_and_leaves_board_unchanged() {
    funil()
        .args(["move", "leads", "999", "perdida"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no entity with id '999'"))
        .stdout(predicate::str::contains("Venda Perdida (0)"))
        .stdout(predicate::str::contains("Novo Lead (1)"));
}

#[test]
fn test_move_snapshot_roundtrip() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("leads.json");

    // First move writes the replacement collection out.
    funil()
        .args(["move", "leads", "1", "proposta", "--out"])
        .arg(&snapshot)
        .assert()
        .success();

    // Second move loads it back and keeps building on the result.
    funil()
        .args(["move", "leads", "2", "perdida", "--file"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Proposta Enviada (2)"))
        .stdout(predicate::str::contains("Venda Perdida (1)"))
        .stdout(predicate::str::contains("Qualificação (0)"));
}

#[test]
fn test_move_json_emits_full_replacement_collection() {
    let output = funil()
        .args(["move", "tasks", "3", "in_progress", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let tasks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 6);
    let moved = tasks.iter().find(|t| t["id"] == "3").unwrap();
    assert_eq!(moved["status"], "in_progress");
    // Everyone else keeps their stage.
    let other = tasks.iter().find(|t| t["id"] == "4").unwrap();
    assert_eq!(other["status"], "backlog");
}

#[test]
fn test_missing_snapshot_is_internal_error() {
    funil()
        .args(["leads", "--file", "/nonexistent/leads.json"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to read snapshot"));
}

#[test]
fn test_new_lead_enters_funnel_at_novo() {
    funil()
        .args(["new", "lead", "Roberto Lima", "--assignee", "Ana Costa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Novo Lead (2)"))
        .stdout(predicate::str::contains("Roberto Lima"));
}

#[test]
fn test_new_lead_rejects_empty_name() {
    funil()
        .args(["new", "lead", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Lead name cannot be empty"));
}

#[test]
fn test_new_lead_rejects_unknown_score() {
    funil()
        .args(["new", "lead", "Roberto Lima", "--score", "gelado"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown score 'gelado'"));
}

#[test]
fn test_new_task_lands_in_backlog_with_json_fields() {
    let output = funil()
        .args([
            "new",
            "task",
            "Revisar contrato",
            "--priority",
            "urgente",
            "--due",
            "2026-09-30",
            "--estimated",
            "8",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let tasks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let created = tasks.as_array().unwrap().last().unwrap().clone();
    assert_eq!(created["title"], "Revisar contrato");
    assert_eq!(created["status"], "backlog");
    assert_eq!(created["priority"], "urgente");
    assert_eq!(created["due_date"], "2026-09-30");
    assert_eq!(created["estimated_hours"], 8);
}

#[test]
fn test_new_lead_snapshot_out_then_board_from_file() {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("leads.json");

    funil()
        .args(["new", "lead", "Roberto Lima", "--out"])
        .arg(&snapshot)
        .assert()
        .success();

    funil()
        .args(["leads", "--file"])
        .arg(&snapshot)
        .args(["-q", "roberto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Novo Lead (1)"))
        .stdout(predicate::str::contains("Roberto Lima"));
}

#[test]
fn test_stages_lists_registry_in_order() {
    funil()
        .args(["stages", "leads"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ORDER"))
        .stdout(
            predicate::str::contains("novo")
                .and(predicate::str::contains("perdida")),
        );

    let output = funil().args(["stages", "tasks"]).output().unwrap();
    let text = String::from_utf8(output.stdout).unwrap();
    let backlog = text.find("backlog").unwrap();
    let done = text.find("done").unwrap();
    assert!(backlog < done);
}

#[test]
fn test_team_directory_with_initials() {
    funil()
        .args(["team"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AC"))
        .stdout(predicate::str::contains("ana@empresa.com"))
        .stdout(predicate::str::contains("Laura Ferreira"))
        .stdout(predicate::str::contains(
            "Com itens no quadro: Ana Costa, Carlos Oliveira, Maria Santos, Pedro Silva, Laura Ferreira",
        ));
}

#[test]
fn test_version_flag() {
    funil()
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("funil"));
}
