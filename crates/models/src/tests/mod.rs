/// CRUD operations tests for the user model
pub mod user_tests;
