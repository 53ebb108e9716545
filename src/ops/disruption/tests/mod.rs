mod common;

mod routing;
mod scan;
mod service;
