//! Validators are shared across threads without locks.

use std::sync::Arc;
use std::thread;

use verity_validator::prelude::*;

fn schema() -> SharedValidator {
    object()
        .field("id", integer())
        .field("name", compose![string(), min_length(1)].unwrap())
        .field("email", or(vec![nullish().shared(), email().shared()]).unwrap())
        .field("phone", oxor_peer("email").unwrap())
        .field("tags", array(string()).unwrap())
        .build()
        .unwrap()
        .shared()
}

#[test]
fn shared_schema_validates_from_many_threads() {
    let schema = schema();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let schema = Arc::clone(&schema);
                scope.spawn(move || {
                    let mut failures = 0;
                    for i in 0..200 {
                        let value = if (worker + i) % 2 == 0 {
                            json!({ "id": i, "name": "n", "tags": ["a"] })
                        } else {
                            json!({ "id": "x", "name": "", "tags": [1] })
                        };
                        if !okay(&value, &schema) {
                            failures += 1;
                        }
                    }
                    failures
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 100);
        }
    });
}

#[test]
fn precomputed_errors_are_shared_between_threads() {
    let both = Arc::new(compose![string(), min_length(3)].unwrap());
    let expected = both.describe();

    thread::scope(|scope| {
        for _ in 0..4 {
            let both = Arc::clone(&both);
            let expected = expected.clone();
            scope.spawn(move || {
                for value in [json!(1), json!("ab"), json!(null)] {
                    assert_eq!(both.validate(&value), Some(expected.clone()));
                }
            });
        }
    });
}
