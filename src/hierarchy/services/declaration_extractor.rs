use crate::hierarchy::domain::InheritancePair;
use regex::Regex;
use std::sync::LazyLock;

/// Matches class/struct declarations that carry a base list, across lines.
///
/// Group 1: derived class name
/// Group 2: raw base list, everything between ':' and the first '{' or ';'
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\b(?:class|struct)\s+",
        r"(?:\w+(?:\([^)]*\))?\s+)*?", // export / declspec style macros
        r"(\w+)\s*",
        r"(?:final\s*)?",
        r":\s*",
        r"([^{;]+)",
        r"\{",
    ))
    .expect("declaration pattern must compile")
});

/// Tokens that may precede a base class name in a base list
const ACCESS_SPECIFIERS: &[&str] = &["public", "protected", "private", "virtual"];

/// DeclarationExtractor service turning header text into inheritance pairs
///
/// This is a pattern-based scanner, not a C++ parser: macros, namespaces and
/// conditional compilation are not resolved. A declaration that does not
/// match simply yields nothing; there is no parse failure.
pub struct DeclarationExtractor;

impl DeclarationExtractor {
    /// Extracts every `(child, parent)` pair declared in `text`, in the order found.
    ///
    /// For a base written as a template instantiation, each top-level template
    /// argument that looks like a class name (a bare identifier starting with an
    /// uppercase letter, other than the derived class itself) is reported as an
    /// additional parent. `class A : public Base<A, Mixin> {` yields
    /// `(A, Base)` and `(A, Mixin)`.
    pub fn extract(text: &str) -> Vec<InheritancePair> {
        let mut pairs = Vec::new();

        for captures in DECLARATION.captures_iter(text) {
            let child = &captures[1];
            for segment in split_top_level(&captures[2]) {
                let Some(base) = parse_base(segment) else {
                    continue;
                };

                pairs.push(InheritancePair::new(child, base.name));

                if let Some(arguments) = base.template_arguments {
                    for argument in split_top_level(arguments) {
                        if argument != child && is_class_like_identifier(argument) {
                            pairs.push(InheritancePair::new(child, argument));
                        }
                    }
                }
            }
        }

        pairs
    }

    /// Same as [`Self::extract`] for raw bytes; invalid UTF-8 sequences are
    /// replaced with U+FFFD instead of failing.
    pub fn extract_bytes(bytes: &[u8]) -> Vec<InheritancePair> {
        Self::extract(&String::from_utf8_lossy(bytes))
    }
}

/// A single base specifier with access keywords removed
#[derive(Debug, PartialEq)]
struct BaseSpecifier<'a> {
    name: &'a str,
    template_arguments: Option<&'a str>,
}

/// Splits on commas that are not nested inside `<...>`.
///
/// Depth is a plain counter; unbalanced input is not rejected, an unterminated
/// tail is returned as the last segment. Segments are trimmed and empty ones
/// dropped.
fn split_top_level(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (index, ch) in raw.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(raw[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(raw[start..].trim());

    parts.retain(|part| !part.is_empty());
    parts
}

fn strip_access_specifiers(segment: &str) -> &str {
    let mut rest = segment.trim_start();
    loop {
        let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if !ACCESS_SPECIFIERS.contains(&&rest[..token_end]) {
            return rest;
        }
        rest = rest[token_end..].trim_start();
    }
}

fn parse_base(segment: &str) -> Option<BaseSpecifier<'_>> {
    let spec = strip_access_specifiers(segment);

    let name = leading_qualified_identifier(spec);
    if name.is_empty() {
        return None;
    }

    let template_arguments = spec[name.len()..]
        .trim_start()
        .strip_prefix('<')
        .map(|inner| &inner[..matching_close(inner)]);

    Some(BaseSpecifier {
        name,
        template_arguments,
    })
}

/// The identifier at the start of `text`, including `::` qualifiers.
///
/// Stops at the first character that cannot be part of a name, so trailing
/// comments and preprocessor lines before the `{` are not picked up.
fn leading_qualified_identifier(text: &str) -> &str {
    let mut end = 0;
    loop {
        let rest = &text[end..];
        if rest.starts_with("::") {
            end += 2;
            continue;
        }
        match rest.chars().next() {
            Some(c) if c.is_alphanumeric() || c == '_' => end += c.len_utf8(),
            _ => break,
        }
    }
    text[..end].trim_end_matches(':')
}

/// Byte offset of the `>` closing an already opened `<`, or the end of the
/// text when it is never closed.
fn matching_close(inner: &str) -> usize {
    let mut depth = 1;
    for (index, ch) in inner.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return index;
                }
            }
            _ => {}
        }
    }
    inner.len()
}

fn is_class_like_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<(String, String)> {
        DeclarationExtractor::extract(text)
            .into_iter()
            .map(|pair| (pair.child, pair.parent))
            .collect()
    }

    fn expected(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(c, p)| (c.to_string(), p.to_string()))
            .collect()
    }

    #[test]
    fn test_single_base() {
        assert_eq!(
            extract("class Dog : public Animal {\n};"),
            expected(&[("Dog", "Animal")])
        );
    }

    #[test]
    fn test_struct_without_access_specifier() {
        assert_eq!(
            extract("struct Other : Derived { int x; };"),
            expected(&[("Other", "Derived")])
        );
    }

    #[test]
    fn test_multiple_bases_keep_order() {
        assert_eq!(
            extract("class A : public B, private C {"),
            expected(&[("A", "B"), ("A", "C")])
        );
    }

    #[test]
    fn test_virtual_and_access_in_any_order() {
        assert_eq!(
            extract("class D : virtual public B, public virtual C {};"),
            expected(&[("D", "B"), ("D", "C")])
        );
    }

    #[test]
    fn test_crtp_template_arguments_become_parents() {
        assert_eq!(
            extract("class A : public Base<A, Mixin> {"),
            expected(&[("A", "Base"), ("A", "Mixin")])
        );
    }

    #[test]
    fn test_child_never_its_own_parent() {
        let pairs = extract("class CRTPChild : public Animal, public CRTPBase<CRTPChild> {};");
        assert_eq!(
            pairs,
            expected(&[("CRTPChild", "Animal"), ("CRTPChild", "CRTPBase")])
        );
    }

    #[test]
    fn test_template_commas_do_not_split_bases() {
        let pairs = extract(
            "class Feature : public StaticObjectInterface<Feature, Animal>, public Flyable {",
        );
        assert_eq!(
            pairs,
            expected(&[
                ("Feature", "StaticObjectInterface"),
                ("Feature", "Animal"),
                ("Feature", "Flyable"),
            ])
        );
    }

    #[test]
    fn test_non_class_template_arguments_ignored() {
        let pairs = extract(
            "class Buffer : public Storage<int, 16, std::allocator<char>, value_type> {};",
        );
        assert_eq!(pairs, expected(&[("Buffer", "Storage")]));
    }

    #[test]
    fn test_nested_template_arguments_not_decomposed() {
        let pairs = extract("class Cache : public Holder<Map<Key, Value>, Policy> {};");
        assert_eq!(pairs, expected(&[("Cache", "Holder"), ("Cache", "Policy")]));
    }

    #[test]
    fn test_declaration_spanning_lines() {
        let text = "class MultilineChild\n    : public Dog\n    , public Flyable {\npublic:\n};";
        assert_eq!(
            extract(text),
            expected(&[("MultilineChild", "Dog"), ("MultilineChild", "Flyable")])
        );
    }

    #[test]
    fn test_export_macros_and_final() {
        assert_eq!(
            extract("class WIDGETS_API Button final : public Widget {};"),
            expected(&[("Button", "Widget")])
        );
        assert_eq!(
            extract("class __declspec(dllexport) Slider : public Widget {};"),
            expected(&[("Slider", "Widget")])
        );
    }

    #[test]
    fn test_no_base_list_yields_nothing() {
        assert!(extract("class Base {};\nstruct Point { int x; };").is_empty());
    }

    #[test]
    fn test_no_keyword_yields_nothing() {
        assert!(extract("int main() { return 0; }").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_forward_declaration_does_not_swallow_next_class() {
        let text = "class Forward;\nclass Dog : public Animal {};";
        assert_eq!(extract(text), expected(&[("Dog", "Animal")]));
    }

    #[test]
    fn test_unterminated_declaration_yields_nothing() {
        assert!(extract("class Dog : public Animal").is_empty());
        assert!(extract("class Dog : public Animal;").is_empty());
    }

    #[test]
    fn test_body_colons_are_not_bases() {
        let text = "class Base {\npublic:\n    virtual ~Base() = default;\n};\nclass Derived : public Base {};";
        assert_eq!(extract(text), expected(&[("Derived", "Base")]));
    }

    #[test]
    fn test_template_class_declaration() {
        let text = "template<typename Self, typename Base>\nclass StaticObjectInterface : public Base {\n};";
        assert_eq!(
            extract(text),
            expected(&[("StaticObjectInterface", "Base")])
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let text = "class A : public B {};\nclass A : public B {};";
        assert_eq!(extract(text), expected(&[("A", "B"), ("A", "B")]));
    }

    #[test]
    fn test_invalid_bytes_are_replaced() {
        let mut bytes = b"// caf\xe9\nclass Dog : public Animal {};".to_vec();
        bytes.push(b'\n');
        let pairs = DeclarationExtractor::extract_bytes(&bytes);
        assert_eq!(pairs, vec![InheritancePair::new("Dog", "Animal")]);
    }

    #[test]
    fn test_split_top_level_unbalanced_tail() {
        assert_eq!(split_top_level("A, B<C, D"), vec!["A", "B<C, D"]);
        assert_eq!(split_top_level("A,, B ,"), vec!["A", "B"]);
    }

    #[test]
    fn test_strip_access_specifiers() {
        assert_eq!(strip_access_specifiers("  public virtual Base<T>"), "Base<T>");
        assert_eq!(strip_access_specifiers("private"), "");
        assert_eq!(strip_access_specifiers("publicity"), "publicity");
    }

    #[test]
    fn test_parse_base_unterminated_template() {
        let base = parse_base("public Holder<Widget").unwrap();
        assert_eq!(base.name, "Holder");
        assert_eq!(base.template_arguments, Some("Widget"));
        assert!(parse_base("public").is_none());
    }

    #[test]
    fn test_line_comment_after_base_is_ignored() {
        assert_eq!(
            extract("class Foo : public Bar // NOLINT\n{\n};"),
            expected(&[("Foo", "Bar")])
        );
    }

    #[test]
    fn test_block_comment_after_base_is_ignored() {
        assert_eq!(
            extract("class Foo : public Bar /* base */ {};"),
            expected(&[("Foo", "Bar")])
        );
    }

    #[test]
    fn test_preprocessor_lines_in_base_list_are_ignored() {
        assert_eq!(
            extract("class Foo\n : public Bar\n#if X\n , public Baz\n#endif\n{};"),
            expected(&[("Foo", "Bar"), ("Foo", "Baz")])
        );
    }

    #[test]
    fn test_qualified_base_name_is_kept() {
        assert_eq!(
            extract("class Impl : public ns::detail::Base<Impl> {};"),
            expected(&[("Impl", "ns::detail::Base")])
        );
        assert_eq!(
            extract("class Impl : public ::Root {};"),
            expected(&[("Impl", "::Root")])
        );
    }

    #[test]
    fn test_comment_template_is_not_an_argument_list() {
        assert_eq!(
            extract("class Foo : public Bar // like Holder<Mixin>\n{};"),
            expected(&[("Foo", "Bar")])
        );
    }

    #[test]
    fn test_leading_qualified_identifier() {
        assert_eq!(leading_qualified_identifier("Bar // x"), "Bar");
        assert_eq!(leading_qualified_identifier("a::B<T>"), "a::B");
        assert_eq!(leading_qualified_identifier("Trailing:: {"), "Trailing");
        assert_eq!(leading_qualified_identifier("/* only */"), "");
        assert!(parse_base("public /* nothing */").is_none());
    }

    #[test]
    fn test_is_class_like_identifier() {
        assert!(is_class_like_identifier("Mixin"));
        assert!(is_class_like_identifier("Mixin_2"));
        assert!(!is_class_like_identifier("int"));
        assert!(!is_class_like_identifier("std::string"));
        assert!(!is_class_like_identifier("Map<K, V>"));
        assert!(!is_class_like_identifier(""));
    }
}
