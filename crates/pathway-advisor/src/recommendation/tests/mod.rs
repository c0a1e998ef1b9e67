mod common;
mod report;
mod service;
