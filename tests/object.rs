use std::rc::Rc;

use pretty_assertions::assert_eq;
use quill::{
    error::RuntimeError,
    interpreter::value::{
        core::{MapPair, MapPairs, Object, ObjectType},
        environment::Environment,
        map_key::Mappable,
    },
};

#[test]
fn string_map_keys_depend_on_contents() {
    let hello1 = Object::from("Hello World");
    let hello2 = Object::from(String::from("Hello World"));
    let diff = Object::from("My name is johnny");

    assert_eq!(hello1.map_key(), hello2.map_key());
    assert_ne!(hello1.map_key(), diff.map_key());
}

#[test]
fn map_keys_carry_the_type() {
    assert_eq!(Object::Integer(1).map_key(), Some(1_i64.map_key()));
    assert_ne!(Object::Integer(1).map_key(), Object::Boolean(true).map_key());
    assert_ne!(Object::Integer(0).map_key(), Object::Boolean(false).map_key());
    assert_eq!(1_i64.map_key().kind, ObjectType::Integer);
}

#[test]
fn only_scalars_are_hashable() {
    assert!(Object::Null.map_key().is_none());
    assert!(Object::from(vec![]).map_key().is_none());
    assert!(Object::Map(Rc::new(MapPairs::default())).map_key().is_none());
}

#[test]
fn truthiness() {
    assert!(!Object::Null.is_truthy());
    assert!(!Object::Boolean(false).is_truthy());
    assert!(Object::Boolean(true).is_truthy());
    assert!(Object::Integer(0).is_truthy());
    assert!(Object::from("").is_truthy());
    assert!(Object::from(vec![]).is_truthy());
}

#[test]
fn type_names() {
    let cases = [(Object::Integer(1), "INTEGER"),
                 (Object::Boolean(true), "BOOLEAN"),
                 (Object::from("s"), "STRING"),
                 (Object::Null, "NULL"),
                 (Object::from(vec![]), "ARRAY"),
                 (Object::Map(Rc::new(MapPairs::default())), "MAP"),
                 (Object::from(RuntimeError::DivisionByZero), "ERROR")];

    for (object, name) in cases {
        assert_eq!(object.kind().to_string(), name);
    }
}

#[test]
fn inspect_renderings() {
    let mut pairs = MapPairs::default();
    let key = Object::from("k");
    pairs.insert(key.map_key().unwrap(),
                 MapPair { key,
                           value: Object::Integer(1) });

    assert_eq!(Object::Integer(-3).inspect(), "-3");
    assert_eq!(Object::Boolean(false).inspect(), "false");
    assert_eq!(Object::from("text").inspect(), "text");
    assert_eq!(Object::Null.inspect(), "null");
    assert_eq!(Object::from(vec![Object::Integer(1), Object::from(vec![])]).inspect(), "[1, []]");
    assert_eq!(Object::Map(Rc::new(pairs)).inspect(), "{k: 1}");
    assert_eq!(Object::from(RuntimeError::IdentifierNotFound("x".into())).inspect(),
               "ERROR: identifier not found: x");
}

#[test]
fn inner_scopes_shadow_outer_ones() {
    let global = Environment::new();
    global.define("x", Object::Integer(1)).unwrap();

    let local = global.enclosed();
    local.define("x", Object::Integer(2)).unwrap();

    assert_eq!(local.get("x"), Some(Object::Integer(2)));
    assert_eq!(global.get("x"), Some(Object::Integer(1)));
    assert_eq!(local.define("x", Object::Null),
               Err(RuntimeError::AlreadyDeclared("x".to_string())));
}

#[test]
fn environment_handles_share_bindings() {
    let env = Environment::new();
    let handle = env.clone();

    handle.define("y", Object::from("shared")).unwrap();
    env.enclosed().define("z", Object::Integer(3)).unwrap();

    assert_eq!(env.get("y"), Some(Object::from("shared")));
    assert_eq!(env.get("z"), None);
    assert_eq!(handle.get("missing"), None);
}
