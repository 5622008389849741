use sort_test_tools::instantiate_sort_tests;

type TestSort = shellsort_research_rs::rust_shellsort::SortImpl;

instantiate_sort_tests!(TestSort);
