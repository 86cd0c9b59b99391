//! Invite code properties.
//!
//! Codes are generated from fresh UUID entropy, so the shape and uniqueness
//! guarantees have to hold for any workspace name and any creation order, not
//! just the handful of fixed names the integration tests use.

use std::collections::HashSet;

use proptest::prelude::*;
use uuid::Uuid;

use huddle::backend::workspace::WorkspaceDirectory;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every generated code is exactly eight uppercase alphanumerics,
    /// whatever the workspace was named.
    #[test]
    fn prop_invite_codes_are_canonical(name in "[A-Za-z][A-Za-z0-9 _-]{0,60}") {
        let code = tokio_test::block_on(async {
            let directory = WorkspaceDirectory::new();
            let workspace = directory.create(name, None, Uuid::new_v4()).await;
            workspace.invite_code
        });

        prop_assert_eq!(code.len(), 8, "code {:?} has the wrong length", code);
        prop_assert!(
            code.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()),
            "code {:?} contains characters outside A-Z0-9",
            code
        );
    }

    /// A directory never hands out the same code twice, no matter how many
    /// workspaces are created back to back.
    #[test]
    fn prop_invite_codes_are_unique_per_directory(count in 1usize..32) {
        let codes = tokio_test::block_on(async {
            let directory = WorkspaceDirectory::new();
            let owner = Uuid::new_v4();
            let mut codes = Vec::with_capacity(count);
            for i in 0..count {
                let workspace = directory.create(format!("team-{i}"), None, owner).await;
                codes.push(workspace.invite_code);
            }
            codes
        });

        let distinct: HashSet<&String> = codes.iter().collect();
        prop_assert_eq!(distinct.len(), codes.len(), "duplicate code in {:?}", codes);
    }

    /// Codes survive a join round trip: the code printed on the workspace is
    /// the one the directory resolves.
    #[test]
    fn prop_invite_code_resolves_to_its_workspace(names in proptest::collection::vec("[a-z]{1,12}", 1..8)) {
        tokio_test::block_on(async {
            let directory = WorkspaceDirectory::new();
            let owner = Uuid::new_v4();
            let mut created = Vec::new();
            for name in names {
                created.push(directory.create(name, None, owner).await);
            }

            for workspace in &created {
                let joiner = Uuid::new_v4();
                let outcome = directory.join_by_invite_code(joiner, &workspace.invite_code).await;
                match outcome {
                    huddle::backend::workspace::InviteJoin::Joined(joined) => {
                        assert_eq!(joined.id, workspace.id);
                    }
                    other => panic!("expected join via {:?} to succeed, got {:?}", workspace.invite_code, other),
                }
            }
        });
    }
}
