//! Leptos components composing the portfolio page.

pub mod contact;
pub mod cursor;
pub mod loading;
pub mod particles;
