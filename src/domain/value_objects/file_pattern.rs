//! File-name patterns
//!
//! Patterns match a file *name* (never the full path) and are anchored to
//! the whole name: `test_.*\.py` matches `test_foo.py` but neither
//! `mytest_foo.py` nor `test_foo.py.bak`.

use std::fmt;

use regex::Regex;

use crate::error::{TddmonError, TddmonResult};

/// Anchored regular expression over file names.
#[derive(Debug, Clone)]
pub struct FilePattern {
    source: String,
    regex: Regex,
}

impl FilePattern {
    /// Compile a regex pattern, anchoring it to the full file name.
    pub fn regex(pattern: &str) -> TddmonResult<Self> {
        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored).map_err(|e| TddmonError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Compile a shell glob (`*`, `?`, `[seq]`, `[!seq]`).
    pub fn glob(pattern: &str) -> TddmonResult<Self> {
        let translated = glob_to_regex(pattern);
        let mut compiled = Self::regex(&translated)?;
        compiled.source = pattern.to_string();
        Ok(compiled)
    }

    pub fn is_match(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }

    /// The pattern as the user wrote it.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Translate a shell glob into an (unanchored) regex body.
///
/// Follows `fnmatch` rules: `*` matches any run of characters (separators
/// included, since only file names are matched), `?` one character, and an
/// unterminated `[` is a literal.
pub fn glob_to_regex(glob: &str) -> String {
    let chars: Vec<char> = glob.chars().collect();
    // `*` and `?` also match newlines, as in fnmatch
    let mut out = String::from("(?s)");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                // Collapse runs of stars
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => {
                let mut j = i;
                if j < chars.len() && chars[j] == '!' {
                    j += 1;
                }
                if j < chars.len() && chars[j] == ']' {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    out.push_str("\\[");
                } else {
                    let mut body = &chars[i..j];
                    i = j + 1;
                    out.push('[');
                    if body.first() == Some(&'!') {
                        out.push('^');
                        body = &body[1..];
                    } else if body.first() == Some(&'^') {
                        out.push_str("\\^");
                        body = &body[1..];
                    }
                    for (k, &member) in body.iter().enumerate() {
                        // Characters the regex crate treats as class syntax;
                        // `--` is class difference there
                        let doubled_dash = member == '-'
                            && (body.get(k + 1) == Some(&'-')
                                || k.checked_sub(1).and_then(|p| body.get(p)) == Some(&'-'));
                        if doubled_dash || matches!(member, '\\' | '[' | '&' | '~') {
                            out.push('\\');
                        }
                        out.push(member);
                    }
                    out.push(']');
                }
            }
            other => out.push_str(&regex::escape(&other.to_string())),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_is_anchored_to_whole_name() {
        let p = FilePattern::regex("test_.*").unwrap();
        assert!(p.is_match("test_foo.py"));
        assert!(!p.is_match("mytest_foo.py"));

        let p = FilePattern::regex(r"test_.*\.py").unwrap();
        assert!(p.is_match("test_foo.py"));
        assert!(!p.is_match("test_foo.py.bak"));
    }

    #[test]
    fn regex_alternation_stays_anchored() {
        let p = FilePattern::regex(r"a\.py|b\.py").unwrap();
        assert!(p.is_match("a.py"));
        assert!(p.is_match("b.py"));
        assert!(!p.is_match("xa.py"));
        assert!(!p.is_match("b.pyc"));
    }

    #[test]
    fn invalid_regex_is_reported() {
        let err = FilePattern::regex("test_(").unwrap_err();
        assert!(matches!(err, TddmonError::InvalidPattern { .. }));
    }

    #[test]
    fn glob_star_extension() {
        let p = FilePattern::glob("*.py").unwrap();
        assert!(p.is_match("pytddmon.py"));
        assert!(p.is_match(".py"));
        assert!(!p.is_match("pytddmon.pyc"));
        assert!(!p.is_match("pytddmon.py.orig"));
        assert_eq!(p.as_str(), "*.py");
    }

    #[test]
    fn glob_question_and_classes() {
        let p = FilePattern::glob("test_?.py").unwrap();
        assert!(p.is_match("test_a.py"));
        assert!(!p.is_match("test_ab.py"));

        let p = FilePattern::glob("[!_]*.py").unwrap();
        assert!(p.is_match("main.py"));
        assert!(!p.is_match("__init__.py"));

        let p = FilePattern::glob("[ab].txt").unwrap();
        assert!(p.is_match("a.txt"));
        assert!(!p.is_match("c.txt"));
    }

    #[test]
    fn glob_unterminated_bracket_is_literal() {
        let p = FilePattern::glob("weird[.py").unwrap();
        assert!(p.is_match("weird[.py"));
    }

    #[test]
    fn glob_translation_escapes_regex_metacharacters() {
        assert_eq!(glob_to_regex("a+b.py"), r"(?s)a\+b\.py");
        assert_eq!(glob_to_regex("**.rs"), r"(?s).*\.rs");
    }

    #[test]
    fn glob_doubled_dash_in_class_is_literal() {
        assert_eq!(glob_to_regex("[a--z].py"), r"(?s)[a\-\-z]\.py");

        let p = FilePattern::glob("[a--z].py").unwrap();
        assert!(p.is_match("a.py"));
        assert!(p.is_match("-.py"));
        assert!(p.is_match("z.py"));
        assert!(!p.is_match("m.py"));

        let p = FilePattern::glob("[a-c].py").unwrap();
        assert!(p.is_match("b.py"));
        assert!(!p.is_match("-.py"));
    }

    #[test]
    fn glob_wildcards_match_newlines() {
        let p = FilePattern::glob("test_*").unwrap();
        assert!(p.is_match("test_a\nb"));

        let p = FilePattern::glob("a?b").unwrap();
        assert!(p.is_match("a\nb"));
    }
}
