// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_authenticated_session;
use crate::{GuardDecision, Session, SessionCommand, apply, guard, guard_session};
use blood_bank_domain::Role;

#[test]
fn test_unauthenticated_redirects_to_login_with_destination() {
    let decision: GuardDecision = guard(false, None, &[Role::Admin], false, "/admin/users");
    assert_eq!(
        decision,
        GuardDecision::RedirectToLogin {
            return_to: String::from("/admin/users")
        }
    );
}

#[test]
fn test_wrong_role_redirects_home() {
    let decision: GuardDecision = guard(true, Some(Role::Staff), &[Role::Admin], false, "/admin");
    assert_eq!(decision, GuardDecision::RedirectToHome);
}

#[test]
fn test_matching_role_is_allowed() {
    let decision: GuardDecision = guard(true, Some(Role::Admin), &[Role::Admin], false, "/admin");
    assert!(decision.is_allowed());
}

#[test]
fn test_empty_required_roles_admits_any_authenticated_user() {
    for role in Role::ALL {
        assert_eq!(
            guard(true, Some(role), &[], false, "/profile"),
            GuardDecision::Allow
        );
    }
}

#[test]
fn test_loading_is_pending_regardless_of_other_inputs() {
    for authenticated in [true, false] {
        for role in [None, Some(Role::Admin), Some(Role::Donor)] {
            for required in [&[][..], &[Role::Admin][..]] {
                assert_eq!(
                    guard(authenticated, role, required, true, "/x"),
                    GuardDecision::Pending
                );
            }
        }
    }
}

#[test]
fn test_authenticated_without_role_is_sent_home_when_roles_required() {
    assert_eq!(
        guard(true, None, &[Role::Donor], false, "/donor"),
        GuardDecision::RedirectToHome
    );
}

#[test]
fn test_guard_session_uses_session_state() {
    let session: Session = create_authenticated_session(Role::Staff);
    assert_eq!(
        guard_session(&session, &[Role::Staff, Role::Admin], "/staff"),
        GuardDecision::Allow
    );

    let loading: Session = apply(&session, SessionCommand::UpdateProfileStart).new_session;
    assert_eq!(
        guard_session(&loading, &[Role::Staff], "/staff"),
        GuardDecision::Pending
    );
}
