//! Placeholder token substitution
//!
//! Templates carry literal `%%TOKEN%%` markers. Replacement is plain
//! substring substitution applied in insertion order - no regex, no
//! escaping, no templating language.

/// Ordered (placeholder, replacement) pairs
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    pairs: Vec<(String, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a replacement pair. Order is significant: pairs are
    /// applied first-to-last.
    pub fn push(&mut self, token: &str, value: &str) -> &mut Self {
        self.pairs.push((token.to_string(), value.to_string()));
        self
    }

    /// Apply every pair to `body`, replacing each occurrence of each
    /// placeholder exactly once per occurrence.
    pub fn apply(&self, body: &str) -> String {
        let mut out = body.to_string();
        for (token, value) in &self.pairs {
            out = out.replace(token, value);
        }
        out
    }
}

/// Derive the class footer symbol: namespace segments joined with `_`,
/// then the class name and the `_GENERATED` suffix.
///
/// `class_footer("A::B", "C")` is `A_B_C_GENERATED`.
pub fn class_footer(namespace: &str, class_name: &str) -> String {
    let joined = namespace.split("::").collect::<Vec<_>>().join("_");
    format!("{}_{}_GENERATED", joined, class_name)
}

/// Derive the file footer symbol: `File_<Class>_GENERATED`.
pub fn file_footer(class_name: &str) -> String {
    format!("File_{}_GENERATED", class_name)
}

/// Wrap a value in double quotes, verbatim.
pub fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

/// Quote each value and join with `", "`, preserving input order.
///
/// `[".png", ".jpg"]` renders as `".png", ".jpg"`.
pub fn quoted_list(values: &[String]) -> String {
    let joined = values.join("\", \"");
    format!("\"{}\"", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_all_occurrences() {
        let mut subs = Substitutions::new();
        subs.push("%%CLASS_NAME%%", "Foo");

        let out = subs.apply("class %%CLASS_NAME%%; // %%CLASS_NAME%%");
        assert_eq!(out, "class Foo; // Foo");
    }

    #[test]
    fn test_apply_in_insertion_order() {
        let mut subs = Substitutions::new();
        subs.push("%%A%%", "%%B%%");
        subs.push("%%B%%", "done");

        // The first replacement's output is visible to the second.
        assert_eq!(subs.apply("%%A%%"), "done");
    }

    #[test]
    fn test_apply_leaves_unknown_tokens() {
        let subs = Substitutions::new();
        assert_eq!(subs.apply("%%UNKNOWN%%"), "%%UNKNOWN%%");
    }

    #[test]
    fn test_namespace_key_not_clobbered_by_namespace() {
        // %%NAMESPACE%% must not match inside %%NAMESPACE_KEY%%.
        let mut subs = Substitutions::new();
        subs.push("%%NAMESPACE_KEY%%", "FG_DEMO");
        subs.push("%%NAMESPACE%%", "Demo");

        let out = subs.apply("#define %%NAMESPACE_KEY%% %%NAMESPACE%%");
        assert_eq!(out, "#define FG_DEMO Demo");
    }

    #[test]
    fn test_class_footer() {
        assert_eq!(class_footer("A::B", "C"), "A_B_C_GENERATED");
        assert_eq!(class_footer("Demo", "Gun"), "Demo_Gun_GENERATED");
    }

    #[test]
    fn test_file_footer() {
        assert_eq!(file_footer("PinWheel"), "File_PinWheel_GENERATED");
    }

    #[test]
    fn test_quoted() {
        assert_eq!(quoted("Material"), "\"Material\"");
    }

    #[test]
    fn test_quoted_list_preserves_order() {
        let exts = vec![".png".to_string(), ".jpg".to_string()];
        assert_eq!(quoted_list(&exts), "\".png\", \".jpg\"");
    }

    #[test]
    fn test_quoted_list_single() {
        let exts = vec![".fbx".to_string()];
        assert_eq!(quoted_list(&exts), "\".fbx\"");
    }
}
