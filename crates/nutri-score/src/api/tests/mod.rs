mod common;
mod handlers;
