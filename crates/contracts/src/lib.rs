//! Types and pure logic shared by the backend and the frontend.

pub mod domain;
pub mod shared;
pub mod usecases;
