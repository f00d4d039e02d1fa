use crate::{BoardMember, BoardRole};

use std::str::FromStr;

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_roles_when_compared_then_viewer_lt_member_lt_admin() {
    assert_that!(BoardRole::Viewer < BoardRole::Member, eq(true));
    assert_that!(BoardRole::Member < BoardRole::Admin, eq(true));
}

#[test]
fn given_role_string_when_parsed_then_round_trips() {
    for role in [BoardRole::Viewer, BoardRole::Member, BoardRole::Admin] {
        let parsed = BoardRole::from_str(role.as_str()).unwrap();
        assert_that!(parsed, eq(role));
    }
}

#[test]
fn given_unknown_role_string_when_parsed_then_fails() {
    let result = BoardRole::from_str("owner");
    assert_that!(result.is_err(), eq(true));
}

#[test]
fn given_member_role_when_checking_minimums_then_matches_ordering() {
    let member = BoardMember::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        BoardRole::Member,
        None,
    );

    assert_that!(member.has_role(BoardRole::Viewer), eq(true));
    assert_that!(member.has_role(BoardRole::Member), eq(true));
    assert_that!(member.has_role(BoardRole::Admin), eq(false));
}
