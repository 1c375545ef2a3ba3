pub mod car_api;
