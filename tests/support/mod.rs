#![allow(dead_code)]

pub mod config;
pub mod solver;
