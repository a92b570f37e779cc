//! Validators are immutable; sharing them across threads needs no locking.

use std::sync::Arc;
use std::thread;

use moji_validator::prelude::*;

#[test]
fn registry_is_usable_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let registry = PolicyRegistry::global();
                let input = if i % 2 == 0 { "田中太郎" } else { "tanaka" };
                registry.validate("name", input).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let outcome = handle.join().unwrap();
        assert_eq!(outcome.is_valid(), i % 2 == 0);
    }
}

#[test]
fn one_policy_shared_across_threads() {
    let policy = Arc::new(PolicyName::Email.policy());

    let handles: Vec<_> = ["hoge@google.jp", "", "hogehogehoge", "a.b@c.org"]
        .into_iter()
        .map(|input| {
            let policy = Arc::clone(&policy);
            thread::spawn(move || (input, policy.validate(input)))
        })
        .collect();

    for handle in handles {
        let (input, outcome) = handle.join().unwrap();
        assert_eq!(outcome, policy.validate(input), "input {input:?}");
    }
}
