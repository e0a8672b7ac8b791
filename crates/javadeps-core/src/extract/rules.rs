//! Pattern rules that pull candidate dependency names out of Java source.
//!
//! These are structural approximations over raw text, not a parse. Each rule
//! is a standalone function so it can be tested on its own; a rule that does
//! not recognize the input returns nothing instead of failing. Multi-line
//! generic signatures, comments and string literals can all fool them, which
//! costs recall but never aborts a run.

use std::sync::LazyLock;

use regex::Regex;

use crate::package::in_package;

/// Annotations that mark an injected field.
pub const INJECTION_ANNOTATIONS: &[&str] = &["Autowired", "Inject"];

/// Lombok annotations that generate a constructor taking the final fields.
pub const CONSTRUCTOR_MARKERS: &[&str] = &["@RequiredArgsConstructor", "@AllArgsConstructor"];

/// Types never resolved from constructor parameters.
pub const BASIC_TYPES: &[&str] = &[
    "byte", "short", "int", "long", "float", "double", "boolean", "char", "void", "Byte", "Short",
    "Integer", "Long", "Float", "Double", "Boolean", "Character", "Number", "String", "Object",
];

static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*import\s+([\w.]+)\s*;").expect("import pattern is valid")
});

static EXTENDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bextends\s+([\w.]+)").expect("extends pattern is valid"));

static IMPLEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bimplements\s+([^{;]+?)\s*\{").expect("implements pattern is valid")
});

static INJECTED_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"@(?:Autowired|Inject)\b(?:\s*\([^)]*\))?\s+(?:(?:public|protected|private)\s+)?(?:final\s+)?([\w.]+)",
    )
    .expect("injected field pattern is valid")
});

static FINAL_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*private\s+final\s+([\w.]+)(?:\s*<[^;=]*>)?\s+\w+\s*;")
        .expect("final field pattern is valid")
});

static CONSTRUCTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bpublic\s+(\w+)\s*\(((?:[^()]|\([^()]*\))*)\)")
        .expect("constructor pattern is valid")
});

static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@[\w.]+(?:\s*\([^()]*\))?").expect("annotation pattern is valid")
});

/// Qualified names of `import` statements inside `base_package`.
pub fn imports<'a>(content: &'a str, base_package: &str) -> Vec<&'a str> {
    IMPORT
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| in_package(name, base_package))
        .collect()
}

/// Supertype names after `extends`.
pub fn extends(content: &str) -> Vec<String> {
    EXTENDS
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| simple_type_name(m.as_str()))
        .map(str::to_string)
        .collect()
}

/// Interface names listed after `implements`.
pub fn implements(content: &str) -> Vec<String> {
    IMPLEMENTS
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .flat_map(|m| {
            strip_generics(m.as_str())
                .split(',')
                .filter_map(|item| simple_type_name(item.trim()))
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Types of fields carrying an injection annotation.
pub fn injected_fields(content: &str) -> Vec<String> {
    INJECTED_FIELD
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| simple_type_name(m.as_str()))
        .map(str::to_string)
        .collect()
}

/// Whether the file generates a constructor from its final fields.
pub fn has_constructor_marker(content: &str) -> bool {
    CONSTRUCTOR_MARKERS
        .iter()
        .any(|marker| content.contains(marker))
}

/// Types of `private final` fields, only for files with a constructor marker.
pub fn constructor_injected_fields(content: &str) -> Vec<String> {
    if !has_constructor_marker(content) {
        return Vec::new();
    }
    FINAL_FIELD
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| simple_type_name(m.as_str()))
        .filter(|name| !is_basic_type(name))
        .map(str::to_string)
        .collect()
}

/// Parameter types of public constructor-shaped declarations.
pub fn constructor_parameters(content: &str) -> Vec<String> {
    CONSTRUCTOR
        .captures_iter(content)
        .filter_map(|caps| caps.get(2))
        .flat_map(|params| {
            let without_annotations = ANNOTATION.replace_all(params.as_str(), " ");
            strip_generics(&without_annotations)
                .split(',')
                .filter_map(|param| parameter_type(param).map(str::to_string))
                .collect::<Vec<_>>()
        })
        .filter(|name| !is_basic_type(name))
        .collect()
}

pub fn is_basic_type(name: &str) -> bool {
    BASIC_TYPES.contains(&name)
}

/// Leading type token of one parameter declaration.
fn parameter_type(param: &str) -> Option<&str> {
    let token = param.split_whitespace().find(|token| *token != "final")?;
    let token = token.trim_end_matches("...").trim_end_matches("[]");
    simple_type_name(token)
}

/// Reduce `com.acme.Base<T>` to `Base`. Returns `None` for non-identifiers.
pub fn simple_type_name(raw: &str) -> Option<&str> {
    let base = raw.split('<').next().unwrap_or(raw).trim();
    let name = base.rsplit('.').next().unwrap_or(base);
    let mut chars = name.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    valid.then_some(name)
}

/// Remove every `<...>` section, honoring nesting.
pub fn strip_generics(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imports_filtered_by_base_package() {
        let content = r#"
package com.acme.web;

import com.acme.service.UserService;
   import com.acme.model.User ;
import java.util.List;
import org.springframework.stereotype.Controller;
import static com.acme.util.Strings.trim;
import com.acme.model.*;
"#;
        assert_eq!(
            imports(content, "com.acme"),
            vec!["com.acme.service.UserService", "com.acme.model.User"]
        );
    }

    #[test]
    fn test_extends_strips_generics_and_qualifiers() {
        assert_eq!(extends("class A extends Base<String> {}"), vec!["Base"]);
        assert_eq!(extends("class A extends com.acme.Base {}"), vec!["Base"]);
        assert!(extends("class A {}").is_empty());
    }

    #[test]
    fn test_implements_multiple_interfaces() {
        let names = implements("public class A implements Runnable, Foo<Map<K, V>>, Bar {");
        assert_eq!(names, vec!["Runnable", "Foo", "Bar"]);
    }

    #[test]
    fn test_implements_spanning_lines() {
        let content = "public class A extends B\n    implements Foo,\n        Bar\n{";
        assert_eq!(implements(content), vec!["Foo", "Bar"]);
    }

    #[test]
    fn test_injected_fields() {
        let content = r#"
    @Autowired
    private UserRepository repository;

    @Inject Clock clock;

    @Autowired(required = false)
    protected final AuditLog auditLog;
"#;
        assert_eq!(
            injected_fields(content),
            vec!["UserRepository", "Clock", "AuditLog"]
        );
    }

    #[test]
    fn test_constructor_fields_require_marker() {
        let fields = r#"
    private final OrderRepository orders;
    private final int retries;
    private final List<Item> items;
    private final Mapper mapper = new Mapper();
"#;
        assert!(constructor_injected_fields(fields).is_empty());

        let marked = format!("@RequiredArgsConstructor\npublic class OrderService {{\n{fields}}}");
        assert_eq!(constructor_injected_fields(&marked), vec!["OrderRepository", "List"]);

        let all_args = format!("@AllArgsConstructor\nclass X {{\n{fields}}}");
        assert!(constructor_injected_fields(&all_args).contains(&"OrderRepository".to_string()));
    }

    #[test]
    fn test_constructor_parameters_skip_basic_types() {
        let content = r#"
public class Checkout {
    public Checkout(int retries, String name, PaymentGateway gateway, final Cart cart) {
    }
    public void process(Order order) {}
}
"#;
        assert_eq!(constructor_parameters(content), vec!["PaymentGateway", "Cart"]);
    }

    #[test]
    fn test_constructor_parameters_with_generics_and_annotations() {
        let content = r#"public Router(Map<String, Handler> handlers, @Qualifier("primary") Dispatcher dispatcher, Filter... filters, Rule[] rules)"#;
        assert_eq!(
            constructor_parameters(content),
            vec!["Map", "Dispatcher", "Filter", "Rule"]
        );
    }

    #[test]
    fn test_empty_constructor() {
        assert!(constructor_parameters("public Widget() {}").is_empty());
    }

    #[test]
    fn test_malformed_input_yields_nothing() {
        let garbage = "public class { implements ; extends < @Autowired";
        assert!(implements(garbage).is_empty());
        assert!(extends(garbage).is_empty());
        assert!(injected_fields(garbage).is_empty());
        assert!(constructor_parameters(garbage).is_empty());
    }

    #[test]
    fn test_strip_generics_nested() {
        assert_eq!(strip_generics("Map<String, List<Foo>> m"), "Map m");
        assert_eq!(strip_generics("A, B"), "A, B");
    }

    #[test]
    fn test_simple_type_name() {
        assert_eq!(simple_type_name("com.acme.Base<T>"), Some("Base"));
        assert_eq!(simple_type_name(" Foo "), Some("Foo"));
        assert_eq!(simple_type_name("1abc"), None);
        assert_eq!(simple_type_name(""), None);
    }
}
