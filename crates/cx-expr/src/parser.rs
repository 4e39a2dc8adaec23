//! Filter text -> group expressions.

use tracing::{debug, warn};

use crate::error::{ExprError, ExprResult};

pub const GROUP_SEPARATOR: char = ';';
pub const SUM_OPERATOR: char = '+';

/// One parsed filter token: a single term, or several terms to be summed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupExpression {
    /// The trimmed token text as typed. Sums are displayed under this label.
    pub label: String,
    /// Term names in the order they appear. Never empty.
    pub terms: Vec<String>,
}

impl GroupExpression {
    /// Build the group for one already-trimmed, non-empty token.
    pub fn from_token(token: &str) -> Self {
        let mut terms = split_top_level(token, SUM_OPERATOR);
        if terms.is_empty() {
            // Only reachable for an empty token.
            terms.push(token.trim().to_string());
        }
        Self {
            label: token.to_string(),
            terms,
        }
    }

    pub fn is_sum(&self) -> bool {
        self.terms.len() > 1
    }

    /// The term of a single-term group.
    pub fn single_term(&self) -> Option<&str> {
        match self.terms.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }
}

/// Split `text` on `delimiter`, but only where it appears outside parentheses.
///
/// Every part is trimmed. Parts that end at a delimiter are always kept, even
/// when empty; the tail after the last delimiter is kept only if it holds any
/// characters at all. A `)` without a matching `(` is ordinary text and never
/// drives the depth below zero, while an unclosed `(` suppresses every later
/// split in `text`.
pub fn split_top_level(text: &str, delimiter: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 0;

    for ch in text.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            c if c == delimiter && depth == 0 => {
                parts.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        parts.push(current.trim().to_string());
    }
    parts
}

/// Check that every `(` in `token` is closed and every `)` was opened.
pub fn check_balance(token: &str) -> ExprResult<()> {
    let mut open = Vec::new();
    for (offset, ch) in token.char_indices() {
        match ch {
            '(' => open.push(offset),
            ')' => {
                if open.pop().is_none() {
                    return Err(ExprError::UnexpectedCloseParen {
                        token: token.to_string(),
                        offset,
                    });
                }
            }
            _ => {}
        }
    }
    match open.first() {
        Some(&offset) => Err(ExprError::UnclosedParen {
            token: token.to_string(),
            offset,
        }),
        None => Ok(()),
    }
}

fn tokens(filter_text: &str) -> impl Iterator<Item = &str> {
    filter_text
        .split(GROUP_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Parse filter text leniently. Never fails.
///
/// An empty (or all-separator) filter gives an empty list, which callers
/// treat as "show everything". Unbalanced tokens are parsed structurally and
/// logged.
pub fn parse(filter_text: &str) -> Vec<GroupExpression> {
    let groups: Vec<GroupExpression> = tokens(filter_text)
        .map(|token| {
            if let Err(err) = check_balance(token) {
                warn!(%err, "parsing unbalanced filter token leniently");
            }
            GroupExpression::from_token(token)
        })
        .collect();
    debug!(groups = groups.len(), "parsed filter text");
    groups
}

/// Parse filter text, rejecting the first token with unbalanced parentheses.
pub fn parse_strict(filter_text: &str) -> ExprResult<Vec<GroupExpression>> {
    tokens(filter_text)
        .map(|token| {
            check_balance(token)?;
            Ok(GroupExpression::from_token(token))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(groups: &[GroupExpression]) -> Vec<Vec<&str>> {
        groups
            .iter()
            .map(|g| g.terms.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn empty_filter_has_no_groups() {
        assert!(parse("").is_empty());
        assert!(parse("   ").is_empty());
        assert!(parse(";; ;").is_empty());
    }

    #[test]
    fn semicolons_make_single_term_groups() {
        let groups = parse("a;b;c");
        assert_eq!(terms(&groups), vec![vec!["a"], vec!["b"], vec!["c"]]);
        assert!(groups.iter().all(|g| !g.is_sum()));
        assert_eq!(groups[2].single_term(), Some("c"));
    }

    #[test]
    fn sums_keep_token_as_label() {
        let groups = parse("(r0)+(r1);(r2_p0)");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "(r0)+(r1)");
        assert_eq!(groups[0].terms, vec!["(r0)", "(r1)"]);
        assert!(groups[0].is_sum());
        assert_eq!(groups[1].label, "(r2_p0)");
        assert_eq!(groups[1].single_term(), Some("(r2_p0)"));
    }

    #[test]
    fn plus_inside_parens_does_not_split() {
        assert_eq!(split_top_level("a(b+c)+d", '+'), vec!["a(b+c)", "d"]);
        assert_eq!(
            split_top_level("((x+y)+z)+w", '+'),
            vec!["((x+y)+z)", "w"]
        );
    }

    #[test]
    fn whitespace_is_trimmed_everywhere() {
        let groups = parse("  (a) +  (b)  ;  c ");
        assert_eq!(groups[0].label, "(a) +  (b)");
        assert_eq!(groups[0].terms, vec!["(a)", "(b)"]);
        assert_eq!(groups[1].label, "c");
    }

    #[test]
    fn empty_parts_between_operators_are_kept() {
        assert_eq!(split_top_level("a++b", '+'), vec!["a", "", "b"]);
        assert_eq!(split_top_level("+a", '+'), vec!["", "a"]);
        // Trailing operator drops the empty tail ...
        assert_eq!(split_top_level("a+", '+'), vec!["a"]);
        // ... unless the tail still holds whitespace.
        assert_eq!(split_top_level("a+ ", '+'), vec!["a", ""]);
    }

    #[test]
    fn unclosed_paren_swallows_rest_of_token() {
        let groups = parse("(a+b");
        assert_eq!(terms(&groups), vec![vec!["(a+b"]]);
        assert_eq!(split_top_level("x+(a+b", '+'), vec!["x", "(a+b"]);
    }

    #[test]
    fn stray_close_paren_is_literal() {
        let groups = parse("a)+b");
        assert_eq!(terms(&groups), vec![vec!["a)", "b"]]);
    }

    #[test]
    fn balance_check_reports_offsets() {
        assert_eq!(check_balance("(a)+(b)"), Ok(()));
        assert_eq!(
            check_balance("x+(a+(b)"),
            Err(ExprError::UnclosedParen {
                token: "x+(a+(b)".to_string(),
                offset: 2,
            })
        );
        assert_eq!(
            check_balance("a)+b"),
            Err(ExprError::UnexpectedCloseParen {
                token: "a)+b".to_string(),
                offset: 1,
            })
        );
    }

    #[test]
    fn strict_parse_rejects_first_bad_token() {
        let err = parse_strict("(ok);(bad;also)").unwrap_err();
        assert_eq!(err.token(), "(bad");

        let groups = parse_strict("(r0)+(r1);(r2_p0)").unwrap();
        assert_eq!(groups, parse("(r0)+(r1);(r2_p0)"));
    }
}
