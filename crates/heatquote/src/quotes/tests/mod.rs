mod common;
mod parsing;
mod routing;
mod service;
