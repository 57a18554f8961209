#![deny(clippy::all)]

//! Core of the transportadora admin console: remote collection clients and
//! the screen state machines the UI renders.

pub mod accounts;
pub mod api;
pub mod catalog;
pub mod dashboard;
pub mod directory;
pub mod forms;
pub mod gateway;
pub mod login;
pub mod navigation;
pub mod notification;
pub mod ports;
pub mod screen;

pub use gateway::{Gateway, HasResource};
pub use notification::{Notification, Severity};
