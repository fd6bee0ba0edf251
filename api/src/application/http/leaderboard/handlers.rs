pub mod get_leaderboard;
