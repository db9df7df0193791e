use application::transfer::{GetOrderHistoryDto, SubmitOrderDto};

use crate::controller::Intake;

#[derive(Debug)]
pub struct SubmitOrderRequest {
    username: String,
}

impl SubmitOrderRequest {
    pub fn new(username: String) -> Self {
        Self { username }
    }
}

#[derive(Debug)]
pub struct OrderHistoryRequest {
    username: String,
}

impl OrderHistoryRequest {
    pub fn new(username: String) -> Self {
        Self { username }
    }
}

pub struct OrderTransformer;

impl Intake<SubmitOrderRequest> for OrderTransformer {
    type To = SubmitOrderDto;
    fn emit(&self, input: SubmitOrderRequest) -> Self::To {
        SubmitOrderDto {
            username: input.username,
        }
    }
}

impl Intake<OrderHistoryRequest> for OrderTransformer {
    type To = GetOrderHistoryDto;
    fn emit(&self, input: OrderHistoryRequest) -> Self::To {
        GetOrderHistoryDto {
            username: input.username,
        }
    }
}
