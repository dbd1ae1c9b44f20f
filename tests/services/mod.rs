mod test_validation;
