pub mod booking_service;
pub mod train_service;
pub mod user_service;
