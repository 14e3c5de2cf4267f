pub mod markup;
pub mod notifier;

pub use crate::domain::model::{Credentials, DeliveryResult, Message};
pub use crate::utils::error::Result;
