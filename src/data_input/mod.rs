// src/data_input/mod.rs

pub mod discovery;
pub mod dt_filename;
pub mod run_parser;
pub mod run_table;

// src/data_input/mod.rs
