mod method_args;
