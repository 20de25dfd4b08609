pub mod codes;
pub mod diagnosis;
pub mod draft;
pub mod intake;
pub mod step;
