
mod closure_tests;
