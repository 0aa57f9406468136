pub mod record;
pub mod violation;
pub mod week;
