pub mod doctor;
pub mod holidays;
pub mod output;
pub mod resolve;
