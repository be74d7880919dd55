//! Access rule evaluation
//!
//! The permission grammar is a consumed black box behind the `Evaluator`
//! trait; the provided implementation understands the simple line grammar
//! used by the deployed access files ("right: principal, principal").

use std::str;

use crate::error::AccessError;
use crate::path::PathName;

/// A capability a principal may hold on a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Read,
    List,
    Write,
}

impl Capability {
    fn name(self) -> &'static str {
        match self {
            Capability::Read => "read",
            Capability::List => "list",
            Capability::Write => "write",
        }
    }
}

/// Reader for rules stored in other files. The resolver always supplies a
/// failing reader: indirect rules are unsupported and deny.
pub type FileReader<'a> = &'a dyn Fn(&str) -> Result<Vec<u8>, AccessError>;

/// Consumed contract: does `principal` hold `capability` on `dir`, given
/// the contents of the governing access-control file?
pub trait Evaluator {
    fn evaluate(
        &self,
        principal: &str,
        capability: Capability,
        dir: &PathName,
        contents: &[u8],
        read_file: FileReader<'_>,
    ) -> Result<bool, AccessError>;
}

/// Line-grammar evaluator: one rule per line, `right: principal, ...`.
///
/// `*` on the left grants every right; a principal of `all` matches any
/// authenticated requester; `#` starts a comment. A principal token
/// containing `/` names a stored group list and is fetched through
/// `read_file`. This is deliberately not a full permission language.
pub struct RuleEvaluator;

impl Evaluator for RuleEvaluator {
    fn evaluate(
        &self,
        principal: &str,
        capability: Capability,
        _dir: &PathName,
        contents: &[u8],
        read_file: FileReader<'_>,
    ) -> Result<bool, AccessError> {
        let text = str::from_utf8(contents)
            .map_err(|_| AccessError::Malformed("file is not valid UTF-8".to_string()))?;

        let mut allowed = false;

        for line in text.lines() {
            let line = match line.split_once('#') {
                Some((before, _)) => before.trim(),
                None => line.trim(),
            };
            if line.is_empty() {
                continue;
            }

            let (rights, members) = line
                .split_once(':')
                .ok_or_else(|| AccessError::Malformed(line.to_string()))?;

            let granted = rights_include(rights, capability)?;
            if !granted {
                continue;
            }

            for member in members.split(',').map(str::trim).filter(|m| !m.is_empty()) {
                if member.contains('/') {
                    // Stored group list; resolving it needs another read.
                    read_file(member)?;
                    continue;
                }
                if member == principal || member == "all" {
                    allowed = true;
                }
            }
        }

        Ok(allowed)
    }
}

fn rights_include(rights: &str, capability: Capability) -> Result<bool, AccessError> {
    let mut granted = false;
    for right in rights.split(',').map(str::trim).filter(|r| !r.is_empty()) {
        match right {
            "*" => granted = true,
            "read" | "list" | "write" | "create" | "delete" => {
                if right == capability.name() {
                    granted = true;
                }
            }
            other => return Err(AccessError::UnknownRight(other.to_string())),
        }
    }
    Ok(granted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir() -> PathName {
        PathName::parse("a@x.com/docs").unwrap()
    }

    fn failing_reader(name: &str) -> Result<Vec<u8>, AccessError> {
        Err(AccessError::IndirectRule(name.to_string()))
    }

    fn evaluate(principal: &str, contents: &str) -> Result<bool, AccessError> {
        RuleEvaluator.evaluate(
            principal,
            Capability::List,
            &dir(),
            contents.as_bytes(),
            &failing_reader,
        )
    }

    #[test]
    fn test_grants_named_principal() {
        assert!(evaluate("b@y.com", "list: b@y.com").unwrap());
        assert!(!evaluate("c@z.com", "list: b@y.com").unwrap());
    }

    #[test]
    fn test_wildcard_right_grants_every_capability() {
        assert!(evaluate("b@y.com", "*: b@y.com").unwrap());
    }

    #[test]
    fn test_other_right_does_not_grant_list() {
        assert!(!evaluate("b@y.com", "read: b@y.com").unwrap());
    }

    #[test]
    fn test_all_matches_any_requester() {
        assert!(evaluate("whoever@anywhere.org", "list: all").unwrap());
    }

    #[test]
    fn test_multiple_lines_and_members() {
        let contents = "# shared docs\nread: c@z.com\nlist: c@z.com, b@y.com\n";
        assert!(evaluate("b@y.com", contents).unwrap());
        assert!(evaluate("c@z.com", contents).unwrap());
        assert!(!evaluate("d@w.com", contents).unwrap());
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        assert!(matches!(
            evaluate("b@y.com", "just some words"),
            Err(AccessError::Malformed(_))
        ));
    }

    #[test]
    fn test_unknown_right_is_an_error() {
        assert!(matches!(
            evaluate("b@y.com", "fly: b@y.com"),
            Err(AccessError::UnknownRight(_))
        ));
    }

    #[test]
    fn test_binary_contents_are_malformed() {
        let result = RuleEvaluator.evaluate(
            "b@y.com",
            Capability::List,
            &dir(),
            &[0xff, 0xfe, 0x00],
            &failing_reader,
        );
        assert!(matches!(result, Err(AccessError::Malformed(_))));
    }

    #[test]
    fn test_group_rule_uses_the_reader_and_fails() {
        assert!(matches!(
            evaluate("b@y.com", "list: shared/team"),
            Err(AccessError::IndirectRule(_))
        ));
    }
}
