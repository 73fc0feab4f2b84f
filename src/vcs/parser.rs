use crate::vcs::backend::VcsKind;

/// Extracts revision identifiers from raw log output, newest first.
///
/// Entries the pattern does not match are skipped.
pub fn parse_revisions(kind: VcsKind, log_output: &str) -> Vec<String> {
    kind.revision_pattern()
        .captures_iter(log_output)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GIT_LOG: &str = "\
commit 3f2a1c0d9e8b7a6f5e4d3c2b1a0f9e8d7c6b5a49
Author: Test User <test@example.com>
Date:   Mon Jan 15 10:30:00 2024 +0000

    Break the build

commit 1111111111111111111111111111111111111111
Author: Test User <test@example.com>
Date:   Sun Jan 14 10:30:00 2024 +0000

    commit abcdef is mentioned in a message

commit deadbeef
Author: Truncated <t@example.com>

commit 0000000000000000000000000000000000000000
Author: Test User <test@example.com>
Date:   Sat Jan 13 10:30:00 2024 +0000

    Initial commit
";

    const HG_LOG: &str = "\
changeset:   2:8d3a4f1b2c3e
tag:         tip
user:        Test User <test@example.com>
date:        Mon Jan 15 10:30:00 2024 +0000
summary:     Break the build

changeset:   1:77aa0c1d2e3f
user:        Test User <test@example.com>
summary:     Tweak

changeset:   0:0123456789ab
user:        Test User <test@example.com>
summary:     Initial commit
";

    const BZR_LOG: &str = "\
------------------------------------------------------------
revno: 3
committer: Test User <test@example.com>
branch nick: trunk
message:
  Break the build
------------------------------------------------------------
revno: 2
committer: Test User <test@example.com>
message:
  revno: 99 quoted in an indented message
------------------------------------------------------------
revno: 1
committer: Test User <test@example.com>
message:
  Initial commit
";

    #[test]
    fn test_git_log_in_document_order() {
        let revisions = parse_revisions(VcsKind::Git, GIT_LOG);
        assert_eq!(
            revisions,
            vec![
                "3f2a1c0d9e8b7a6f5e4d3c2b1a0f9e8d7c6b5a49".to_string(),
                "1111111111111111111111111111111111111111".to_string(),
                "0000000000000000000000000000000000000000".to_string(),
            ]
        );
    }

    #[test]
    fn test_hg_log_keeps_number_and_hash() {
        let revisions = parse_revisions(VcsKind::Mercurial, HG_LOG);
        assert_eq!(
            revisions,
            vec![
                "2:8d3a4f1b2c3e".to_string(),
                "1:77aa0c1d2e3f".to_string(),
                "0:0123456789ab".to_string(),
            ]
        );
    }

    #[test]
    fn test_bzr_log_ignores_indented_lines() {
        let revisions = parse_revisions(VcsKind::Bazaar, BZR_LOG);
        assert_eq!(
            revisions,
            vec!["3".to_string(), "2".to_string(), "1".to_string()]
        );
    }

    #[test]
    fn test_empty_log_yields_no_revisions() {
        for kind in VcsKind::ALL {
            assert!(parse_revisions(kind, "").is_empty());
        }
    }

    #[test]
    fn test_other_backend_log_does_not_match() {
        assert!(parse_revisions(VcsKind::Git, HG_LOG).is_empty());
        assert!(parse_revisions(VcsKind::Bazaar, GIT_LOG).is_empty());
    }
}
