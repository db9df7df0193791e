use application::transfer::{FindItemsDto, GetItemDto};

use crate::controller::Intake;

#[derive(Debug)]
pub struct GetItemRequest {
    id: i64,
}

impl GetItemRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct FindItemsRequest {
    name: String,
}

impl FindItemsRequest {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

pub struct ItemTransformer;

impl Intake<GetItemRequest> for ItemTransformer {
    type To = GetItemDto;
    fn emit(&self, input: GetItemRequest) -> Self::To {
        GetItemDto { id: input.id }
    }
}

impl Intake<FindItemsRequest> for ItemTransformer {
    type To = FindItemsDto;
    fn emit(&self, input: FindItemsRequest) -> Self::To {
        FindItemsDto { name: input.name }
    }
}
