mod default_tests;
