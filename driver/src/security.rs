pub use self::{password::*, token::*};

mod password;
mod token;
