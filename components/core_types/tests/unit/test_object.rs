//! Unit tests for JsObject and Symbol

use core_types::{JsObject, ObjectClass, Symbol, Value};

#[cfg(test)]
mod object_tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(ObjectClass::Object.name(), "Object");
        assert_eq!(ObjectClass::Arguments.name(), "Arguments");
        assert_eq!(ObjectClass::Date(0.0).name(), "Date");
        assert_eq!(
            ObjectClass::RegExp {
                source: "a".to_string(),
                flags: String::new()
            }
            .name(),
            "RegExp"
        );
    }

    #[test]
    fn test_callable_override() {
        let host = JsObject::new(ObjectClass::Object).with_callable(true);
        assert!(host.is_callable());
        assert_eq!(Value::from(host).type_of(), "function");
    }

    #[test]
    fn test_tag_override_does_not_change_typeof() {
        let obj = JsObject::new(ObjectClass::Object).with_to_string_tag("Function");
        let value = Value::from(obj);
        assert_eq!(value.type_of(), "object");
        assert_eq!(value.class_tag(), "Function");
    }
}

#[cfg(test)]
mod symbol_tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbols_hash_by_identity() {
        let a = Symbol::new(Some("x"));
        let b = Symbol::new(Some("x"));
        let set: HashSet<Symbol> = [a.clone(), b, a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_symbol_values_compare_by_identity() {
        let a = Symbol::new(None);
        assert_eq!(Value::Symbol(a.clone()), Value::Symbol(a));
        assert_ne!(Value::symbol(None), Value::symbol(None));
    }
}
