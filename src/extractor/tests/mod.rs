mod region_tests;
mod extractor_tests;
