mod pages_tests;
mod submit_tests;
