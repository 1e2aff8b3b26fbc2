#![allow(non_snake_case)]

pub mod models;
pub mod service;
pub mod clients;
pub mod storage;
pub mod config;
