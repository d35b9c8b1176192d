pub mod booking_route;
pub mod train_route;
pub mod user_route;
