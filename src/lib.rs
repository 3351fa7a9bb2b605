// Calendar Layout Library
// Collision-free time-grid layout for calendar day and week views

pub mod models;
pub mod services;
pub mod utils;
