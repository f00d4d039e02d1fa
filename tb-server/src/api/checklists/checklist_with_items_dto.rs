use crate::{ChecklistDto, ChecklistItemDto};

use tb_core::{Checklist, ChecklistItem};

use serde::Serialize;

/// A checklist together with its items, in position order
#[derive(Debug, Serialize)]
pub struct ChecklistWithItemsDto {
    pub checklist: ChecklistDto,
    pub items: Vec<ChecklistItemDto>,
}

impl From<(Checklist, Vec<ChecklistItem>)> for ChecklistWithItemsDto {
    fn from((checklist, items): (Checklist, Vec<ChecklistItem>)) -> Self {
        Self {
            checklist: checklist.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}
