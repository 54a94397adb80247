mod ordered_collection_service;
mod property_tests;
mod reorder_validator;
