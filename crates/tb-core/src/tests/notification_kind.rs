use crate::models::checklist_item::ChecklistItem;
use crate::NotificationKind;

use std::str::FromStr;

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_kind_string_when_parsed_then_round_trips() {
    for kind in [
        NotificationKind::System,
        NotificationKind::Assignment,
        NotificationKind::Comment,
        NotificationKind::Invitation,
        NotificationKind::Mention,
        NotificationKind::DueDate,
    ] {
        let parsed = NotificationKind::from_str(kind.as_str()).unwrap();
        assert_that!(parsed, eq(kind));
    }
}

#[test]
fn given_checklist_item_when_checked_then_records_completion_metadata() {
    let mut item = ChecklistItem::new(Uuid::new_v4(), "write tests".to_string(), 0);
    let user_id = Uuid::new_v4();

    item.check(user_id);
    assert_that!(item.is_checked, eq(true));
    assert_that!(item.completed_by, some(eq(user_id)));
    assert_that!(item.completed_at.is_some(), eq(true));

    item.uncheck();
    assert_that!(item.is_checked, eq(false));
    assert_that!(item.completed_by, none());
    assert_that!(item.completed_at, none());
}
