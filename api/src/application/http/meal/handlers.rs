pub mod log_meal;
