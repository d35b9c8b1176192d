#[macro_use]
extern crate rocket;
extern crate rocket_okapi;

use dotenv::dotenv;
use rocket::fairing::AdHoc;
use rocket::serde::json::{json, Json, Value};
use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::*;

use train_booking_system::config::AppConfig;
use train_booking_system::db::Database;
use train_booking_system::routes;
use train_booking_system::services::booking_service::BookingService;
use train_booking_system::services::train_service::TrainService;
use train_booking_system::services::user_service::UserService;
use train_booking_system::swagger::swagger_ui;

#[get("/")]
fn index() -> Json<Value> {
    Json(json!({ "message": "Train booking service is running" }))
}

#[launch]
async fn rocket() -> _ {
    dotenv().ok();

    let config = AppConfig::from_env().expect("incomplete environment configuration");

    // Connect to the database
    let database = Database::connect(&config)
        .await
        .expect("Failed to connect to database");
    let pool = database.pool().clone();

    // Initialize the services
    let user_service = UserService::new(pool.clone(), config.jwt_secret.clone());
    let train_service = TrainService::new(pool.clone());
    let booking_service = BookingService::new(pool);

    rocket::build()
        .manage(config)
        .manage(user_service)
        .manage(train_service)
        .manage(booking_service)
        .mount("/", routes![index])
        .mount(
            "/api",
            openapi_get_routes![
                routes::user_route::register,
                routes::user_route::login,
                routes::train_route::add_train,
                routes::train_route::train_availability,
                routes::booking_route::create_booking,
                routes::booking_route::list_bookings,
                routes::booking_route::get_booking,
            ],
        )
        .mount("/swagger", make_swagger_ui(&swagger_ui()))
        .attach(AdHoc::on_response("CORS", |_, res| {
            Box::pin(async move {
                res.set_header(rocket::http::Header::new(
                    "Access-Control-Allow-Origin",
                    "*",
                ));
            })
        }))
}
