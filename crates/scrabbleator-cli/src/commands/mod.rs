pub mod find;
pub mod run;
