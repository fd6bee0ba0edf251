pub mod food;
pub mod health;
pub mod leaderboard;
pub mod meal;
pub mod query_params;
pub mod reaction;
pub mod server;
