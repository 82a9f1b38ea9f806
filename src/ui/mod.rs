/// UI module exports

pub mod app;
