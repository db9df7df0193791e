use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartDto {
    pub user_id: i64,
    pub username: String,
    pub lines: Vec<CartLineDto>,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineDto {
    pub item_id: i64,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

pub struct ModifyCartDto {
    pub username: String,
    pub item_id: i64,
    pub quantity: i32,
}

pub struct GetCartDto {
    pub username: String,
}
