mod web_source_tests;
