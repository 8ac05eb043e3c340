//! HTTP handlers

pub mod career;
pub mod crud;
pub mod employee;
pub mod engagement;
pub mod health;
pub mod skills;
pub mod workforce;
