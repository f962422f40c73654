//! Integration tests for authorization checks
//!
//! Tests decisions through the public API, error reporting at the API
//! boundary, and repeated and parallel checks over shared, borrowed inputs.

use cretoai_scopes::{satisfies, Given, Required, ScopesError};
use std::sync::Arc;
use std::thread;

/// Client scopes for a worker pool with a provisioner grant
fn worker_scopes() -> Given {
    Given::new([
        "queue:claim-work:proj-ci/*",
        "queue:worker-id:proj-ci/*",
        "assume:worker-pool:proj-ci/linux",
        "secrets:get:project/ci/*",
    ])
}

#[test]
fn test_worker_can_claim_work() {
    let required = Required::from(vec![vec![
        "queue:claim-work:proj-ci/linux",
        "queue:worker-id:proj-ci/worker-17",
    ]]);

    assert!(worker_scopes().satisfies(&required));
    assert!(worker_scopes().authorize(&required).is_ok());
}

#[test]
fn test_worker_cannot_read_other_project_secrets() {
    let required = Required::from(vec![vec!["secrets:get:project/release/signing-key"]]);

    let err = worker_scopes().authorize(&required).unwrap_err();
    match err {
        ScopesError::InsufficientScopes { required } => {
            assert_eq!(required, "\"secrets:get:project/release/signing-key\"");
        }
    }
}

#[test]
fn test_denial_message_lists_alternatives() {
    let required = Required::from(vec![
        vec!["queue:create-task:highest:proj-ci/linux", "queue:route:index"],
        vec!["assume:worker-pool:proj-release/*"],
    ]);

    let err = worker_scopes().authorize(&required).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Insufficient scopes: client scopes do not satisfy \
         (\"queue:create-task:highest:proj-ci/linux\" AND \"queue:route:index\") \
         OR \"assume:worker-pool:proj-release/*\""
    );
}

#[test]
fn test_alternative_grant_paths() {
    // Either a direct queue scope, or the role that implies it
    let required = Required::from(vec![
        vec!["queue:create-task:highest:proj-ci/linux"],
        vec!["assume:worker-pool:proj-ci/linux"],
    ]);

    assert!(worker_scopes().satisfies(&required));
    assert!(!Given::new(["queue:create-task:low:*"]).satisfies(&required));
}

#[test]
fn test_repeated_checks_leave_inputs_unchanged() {
    let given = worker_scopes();
    let required = Required::from(vec![vec!["secrets:get:project/ci/token"]]);
    let (given_before, required_before) = (given.clone(), required.clone());

    for _ in 0..1_000 {
        assert!(given.satisfies(&required));
        assert!(given.authorize(&required).is_ok());
    }

    assert_eq!(given, given_before);
    assert_eq!(required, required_before);
}

#[test]
fn test_borrowed_slices_need_no_owned_types() {
    let scopes: Vec<String> = vec!["queue:claim-work:proj-ci/*".to_string()];
    let given: Vec<&str> = scopes.iter().map(String::as_str).collect();
    let required = [["queue:claim-work:proj-ci/linux"]];

    assert!(satisfies(&given, &required));
    assert!(!satisfies(&given, &[["queue:claim-work:proj-release/linux"]]));
}

#[test]
fn test_parallel_checks_share_inputs() {
    let given = Arc::new(worker_scopes());
    let mut handles = vec![];

    for i in 0..8 {
        let given = Arc::clone(&given);
        handles.push(thread::spawn(move || {
            let required = Required::from(vec![vec![format!("queue:claim-work:proj-ci/pool-{}", i)]]);
            (0..50).all(|_| given.satisfies(&required))
        }));
    }

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
