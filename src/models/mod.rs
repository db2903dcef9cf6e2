pub mod health;
pub mod page;
pub mod record;
pub mod status;
pub mod template;
pub mod validation;
