//! Global installation runs once per process, so it lives in its own test binary.

use moji_log::{Config, LogError};

#[test]
fn init_installs_once() {
    let bad = Config {
        level: "moji=loud".into(),
        ..Config::quiet()
    };
    assert!(matches!(moji_log::init_with(bad), Err(LogError::Filter { .. })));

    let guard = moji_log::init_with(Config::quiet()).expect("first init succeeds");
    assert_eq!(guard.filter(), "warn");

    let second = moji_log::init_with(Config::quiet());
    assert!(matches!(second, Err(LogError::AlreadyInitialized(_))));
}
