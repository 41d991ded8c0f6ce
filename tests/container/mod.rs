mod config_file_tests;
mod hash_functions_tests;
