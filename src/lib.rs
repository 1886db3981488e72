pub mod apod;
pub mod config;
mod error;

pub use apod::{
    types::{Apod, Fetched, HdImage},
    ApodClient,
};
pub use config::Config;
pub use error::*;
