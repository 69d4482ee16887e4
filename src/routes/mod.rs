pub mod procedures;
