pub mod identity;
pub mod property;
pub mod travel;
pub mod trip;
