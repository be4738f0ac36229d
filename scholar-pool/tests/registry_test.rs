//! Program pool integration tests

use std::collections::HashSet;

use scholar_pool::codec::{program_from_json, program_to_json, programs_from_json, programs_to_json};
use scholar_pool::{all_programs, pool, IntegrityReport, Program, Tier};

fn find(id: &str) -> &'static Program {
    all_programs()
        .iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| panic!("program {} missing", id))
}

#[test]
fn test_pool_contains_three_programs_in_order() {
    let ids: Vec<&str> = all_programs().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["lpdp-reguler-2026", "gates-cambridge-2025", "lpdp-entrepreneur-2025"]
    );
}

#[test]
fn test_ids_are_non_empty_and_unique() {
    let mut seen = HashSet::new();
    for program in all_programs() {
        assert!(!program.id.is_empty());
        assert!(seen.insert(program.id.as_str()), "duplicate id {}", program.id);
    }
}

#[test]
fn test_deadlines_parse() {
    for program in all_programs() {
        let deadline = program
            .deadline_at()
            .unwrap_or_else(|e| panic!("{}: {}", program.id, e));
        assert!(deadline.timestamp() > 0);
    }
}

#[test]
fn test_match_scores_in_range() {
    for program in all_programs() {
        assert!(program.match_score <= 100, "{} out of range", program.id);
    }
}

/// Dossier keys should resolve against checklist ids or doc brief ids.
/// Unresolved keys are a data-quality signal; the authored data has none.
#[test]
fn test_dossier_keys_resolve() {
    let report = IntegrityReport::check(all_programs());
    let unresolved: Vec<String> = report
        .unresolved_dossier_keys()
        .map(|f| f.to_string())
        .collect();
    assert!(unresolved.is_empty(), "unresolved dossier keys: {:?}", unresolved);
    assert!(report.is_clean());
}

#[test]
fn test_retrieval_is_idempotent() {
    let first = all_programs();
    let second = all_programs();
    assert_eq!(first, second);
    assert!(std::ptr::eq(first, second));
    assert_eq!(pool().fingerprint(), pool().fingerprint());
}

#[test]
fn test_gates_cambridge_record() {
    let gates = find("gates-cambridge-2025");
    assert_eq!(gates.tier, Tier::Mythic);
    assert_eq!(gates.match_score, 96);
    assert!(gates.checklist.is_empty());
}

#[test]
fn test_lpdp_entrepreneur_checklist() {
    let program = find("lpdp-entrepreneur-2025");
    let ids: Vec<&str> = program.checklist.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["business_plan", "commitment_letter", "lang_english"]);
}

#[test]
fn test_program_json_roundtrip() {
    for program in all_programs() {
        let json = program_to_json(program).unwrap();
        let parsed = program_from_json(&json).unwrap();
        assert_eq!(&parsed, program);
    }

    let json = programs_to_json(all_programs(), true).unwrap();
    assert_eq!(programs_from_json(&json).unwrap(), all_programs());
}

#[test]
fn test_concurrent_readers_see_same_pool() {
    let expected = pool().fingerprint().to_string();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let registry = pool();
                    (registry.len(), registry.fingerprint().to_string())
                })
            })
            .collect();

        for handle in handles {
            let (len, fingerprint) = handle.join().unwrap();
            assert_eq!(len, 3);
            assert_eq!(fingerprint, expected);
        }
    });
}
