mod parser_test;
