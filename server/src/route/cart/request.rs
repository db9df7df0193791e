use serde::Deserialize;

use application::transfer::{GetCartDto, ModifyCartDto};

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyCartRequest {
    username: String,
    item_id: i64,
    quantity: i32,
}

#[derive(Debug)]
pub struct GetCartRequest {
    username: String,
}

impl GetCartRequest {
    pub fn new(username: String) -> Self {
        Self { username }
    }
}

pub struct CartTransformer;

impl Intake<ModifyCartRequest> for CartTransformer {
    type To = ModifyCartDto;
    fn emit(&self, input: ModifyCartRequest) -> Self::To {
        ModifyCartDto {
            username: input.username,
            item_id: input.item_id,
            quantity: input.quantity,
        }
    }
}

impl Intake<GetCartRequest> for CartTransformer {
    type To = GetCartDto;
    fn emit(&self, input: GetCartRequest) -> Self::To {
        GetCartDto {
            username: input.username,
        }
    }
}
