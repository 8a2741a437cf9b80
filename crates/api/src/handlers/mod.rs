pub mod articles;
pub mod inquiries;
pub mod projects;
