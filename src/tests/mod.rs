mod deparser_test;
