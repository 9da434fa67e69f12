pub mod common;
pub mod db;
pub mod frontend;
pub mod models;
pub mod services;
pub mod web;
