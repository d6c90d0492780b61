pub mod date_range;
pub mod feedback;
pub mod rating;
