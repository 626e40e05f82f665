pub mod run_cli;
