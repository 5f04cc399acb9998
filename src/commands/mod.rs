pub mod locate;
pub mod plot;
