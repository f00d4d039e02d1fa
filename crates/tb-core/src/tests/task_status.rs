use crate::{TaskPriority, TaskStatus};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_status_string_when_parsed_then_round_trips() {
    for status in [
        TaskStatus::ToDo,
        TaskStatus::InProgress,
        TaskStatus::InReview,
        TaskStatus::Done,
        TaskStatus::Archived,
    ] {
        let parsed = TaskStatus::from_str(status.as_str()).unwrap();
        assert_that!(parsed, eq(status));
    }
}

#[test]
fn given_unknown_status_string_when_parsed_then_fails() {
    assert_that!(TaskStatus::from_str("doing").is_err(), eq(true));
}

#[test]
fn given_new_task_defaults_then_todo_and_medium() {
    assert_that!(TaskStatus::default(), eq(TaskStatus::ToDo));
    assert_that!(TaskPriority::default(), eq(TaskPriority::Medium));
}

#[test]
fn given_priority_string_when_parsed_then_round_trips() {
    for priority in [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Critical,
    ] {
        let parsed = TaskPriority::from_str(priority.as_str()).unwrap();
        assert_that!(parsed, eq(priority));
    }
}
