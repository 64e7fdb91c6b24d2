mod config_tests;
mod tech_specs_tests;
