use pretty_assertions::assert_eq;

use super::*;

#[test]
fn lookup_finds_most_recent() {
    let mut env = Environment::new();
    env.define("x", Value::Int(1));
    env.define("y", Value::Int(2));
    env.define("x", Value::Int(3));
    assert_eq!(env.lookup("x"), Some(&Value::Int(3)));
    assert_eq!(env.lookup("y"), Some(&Value::Int(2)));
    assert_eq!(env.lookup("z"), None);
}

#[test]
fn truncate_restores_shadowed_binding() {
    let mut env = Environment::new();
    env.define("x", Value::Int(1));
    let depth = env.depth();
    env.define("x", Value::Str("inner".into()));
    env.define("tmp", Value::Bool(true));
    assert_eq!(env.lookup("x"), Some(&Value::Str("inner".into())));

    env.truncate(depth);
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup("x"), Some(&Value::Int(1)));
    assert_eq!(env.lookup("tmp"), None);
}

#[test]
fn assignment_targets_innermost() {
    let mut env = Environment::new();
    env.define("x", Value::Int(1));
    let depth = env.depth();
    env.define("x", Value::Int(2));
    if let Some(slot) = env.lookup_mut("x") {
        *slot = Value::Int(20);
    }
    assert_eq!(env.lookup("x"), Some(&Value::Int(20)));
    env.truncate(depth);
    assert_eq!(env.lookup("x"), Some(&Value::Int(1)));
    assert!(env.lookup_mut("missing").is_none());
}
