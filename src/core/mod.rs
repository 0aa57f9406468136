pub mod aggregate;
pub mod detailed;
pub mod individual;
pub mod overachievers;
pub mod shape;
pub mod summary;
pub mod team;
pub mod validate;
pub mod weeks;
