mod config_startup_tests;
