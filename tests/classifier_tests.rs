// tests/classifier_tests.rs
// Unit coverage for the lexical utilities, normalizers, classifiers,
// and the condition transformer.

#[cfg(test)]
mod lexical_tests {
    use py2pseudo::lexical::{split_outside_quotes, word_exists_outside_quotes};

    #[test]
    fn test_symbol_outside_quotes() {
        assert!(word_exists_outside_quotes("+", "a + b"));
        assert!(
            !word_exists_outside_quotes("+", "\"a + b\""),
            "plus inside double quotes must not match"
        );
        assert!(
            !word_exists_outside_quotes("+", "'a + b'"),
            "plus inside single quotes must not match"
        );
        assert!(word_exists_outside_quotes("+", "\"a\" + b"));
    }

    #[test]
    fn test_word_matching_is_whole_word_and_case_insensitive() {
        assert!(word_exists_outside_quotes("and", "a AND b"));
        assert!(
            !word_exists_outside_quotes("or", "for x"),
            "'or' inside 'for' is not a word match"
        );
        assert!(
            !word_exists_outside_quotes("and", "operand"),
            "'and' inside 'operand' is not a word match"
        );
        assert!(!word_exists_outside_quotes("and", "x == 'a and b'"));
    }

    #[test]
    fn test_underscore_is_a_symbol_token() {
        assert!(word_exists_outside_quotes("_", "user_name"));
        assert!(!word_exists_outside_quotes("_", "\"user_name\""));
        assert!(!word_exists_outside_quotes("_", "bananasplit"));
    }

    #[test]
    fn test_split_outside_quotes() {
        assert_eq!(split_outside_quotes("+", "a + b"), vec!["a", "b"]);
        assert_eq!(
            split_outside_quotes("+", "\"a + b\" + c"),
            vec!["\"a + b\"", "c"],
            "quote-internal plus is not a split point"
        );
        assert_eq!(
            split_outside_quotes("+", "no separators here"),
            vec!["no separators here"]
        );
    }

    #[test]
    fn test_split_trims_pieces() {
        assert_eq!(
            split_outside_quotes("==", "x   ==   1"),
            vec!["x", "1"]
        );
    }
}

#[cfg(test)]
mod identifier_tests {
    use py2pseudo::identifier::{normalize_boolean_literal, normalize_identifier};

    #[test]
    fn test_snake_case_becomes_camel_case() {
        assert_eq!(normalize_identifier("user_name"), "userName");
        assert_eq!(normalize_identifier("my_long_name"), "myLongName");
    }

    #[test]
    fn test_identifier_without_underscore_is_unchanged() {
        assert_eq!(normalize_identifier("total"), "total");
        assert_eq!(normalize_identifier("userName"), "userName");
    }

    #[test]
    fn test_quoted_underscore_is_untouched() {
        assert_eq!(normalize_identifier("\"user_name\""), "\"user_name\"");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_identifier("first_second_third");
        let twice = normalize_identifier(&once);
        assert_eq!(once, twice, "normalizing twice must equal normalizing once");
    }

    #[test]
    fn test_boolean_literals_are_lowered() {
        assert_eq!(normalize_boolean_literal("True"), "true");
        assert_eq!(normalize_boolean_literal("False"), "false");
        assert_eq!(normalize_boolean_literal("Truthy"), "Truthy");
        assert_eq!(normalize_boolean_literal("5"), "5");
    }
}

#[cfg(test)]
mod classifier_tests {
    use py2pseudo::classify::{
        classify, classify_assignment, classify_input, classify_output, is_conditional_header,
        Statement,
    };

    #[test]
    fn test_plain_assignment() {
        assert_eq!(classify_assignment("x = 5"), Some("x <- 5".to_string()));
        assert_eq!(classify_assignment("c = True"), Some("c <- true".to_string()));
        assert_eq!(
            classify_assignment("user_age = old_age"),
            Some("userAge <- oldAge".to_string())
        );
    }

    #[test]
    fn test_assignment_rejects_non_identifier_targets() {
        assert_eq!(classify_assignment("a.b = 5"), None);
        assert_eq!(classify_assignment("x += 5"), None);
        assert_eq!(classify_assignment("print(x)"), None);
    }

    #[test]
    fn test_output_single_argument() {
        assert_eq!(
            classify_output("print(\"hello\")"),
            Some("OUTPUT \"hello\"".to_string())
        );
        assert_eq!(classify_output("print(name)"), Some("OUTPUT name".to_string()));
    }

    #[test]
    fn test_output_concatenation_becomes_commas() {
        assert_eq!(
            classify_output("print(\"hello\" + name)"),
            Some("OUTPUT \"hello\", name".to_string())
        );
        assert_eq!(
            classify_output("print(\"a + b\" + first_name)"),
            Some("OUTPUT \"a + b\", firstName".to_string()),
            "plus inside a literal is not a separator"
        );
    }

    #[test]
    fn test_output_requires_bare_call() {
        assert_eq!(classify_output("print (\"x\")"), None);
        assert_eq!(classify_output("println(\"x\")"), None);
        assert_eq!(classify_output("x = print(\"x\")"), None);
    }

    #[test]
    fn test_input_with_prompt() {
        assert_eq!(
            classify_input("user_name = input(\"Enter name: \")"),
            Some(vec![
                "OUTPUT Enter name: ".to_string(),
                "INPUT userName".to_string(),
            ])
        );
    }

    #[test]
    fn test_input_without_prompt() {
        assert_eq!(classify_input("x = input()"), Some(vec!["INPUT x".to_string()]));
    }

    #[test]
    fn test_input_with_int_conversion() {
        assert_eq!(
            classify_input("age = int(input(\"Age: \"))"),
            Some(vec![
                "OUTPUT Age: ".to_string(),
                "age <- STR_TO_NUM(age)".to_string(),
                "INPUT age".to_string(),
            ]),
            "conversion line comes before the INPUT line"
        );
    }

    #[test]
    fn test_input_with_str_conversion() {
        assert_eq!(
            classify_input("code = str(input())"),
            Some(vec![
                "code <- NUM_TO_STR(code)".to_string(),
                "INPUT code".to_string(),
            ])
        );
    }

    #[test]
    fn test_input_rejects_plain_assignment() {
        assert_eq!(classify_input("x = 5"), None);
        assert_eq!(classify_input("x = inputs()"), None);
    }

    #[test]
    fn test_conditional_header_shape() {
        assert!(is_conditional_header("if x == 1:"));
        assert!(is_conditional_header("if a and b:"));
        assert!(!is_conditional_header("if x == 1"), "missing colon");
        assert!(!is_conditional_header("if :"), "empty condition");
        assert!(!is_conditional_header("elif x == 1:"), "elif is not supported");
        assert!(!is_conditional_header("else:"));
    }

    #[test]
    fn test_priority_input_before_assignment() {
        match classify("x = input()") {
            Some(Statement::Input(_)) => {}
            other => panic!("expected input classification, got {:?}", other),
        }
        match classify("x = 5") {
            Some(Statement::Assignment(text)) => assert_eq!(text, "x <- 5"),
            other => panic!("expected assignment classification, got {:?}", other),
        }
    }
}

#[cfg(test)]
mod condition_tests {
    use py2pseudo::condition::{transform_all_conditions, transform_condition};

    #[test]
    fn test_relational_rewrites() {
        assert_eq!(transform_condition("a != b"), "a <> b");
        assert_eq!(transform_condition("a == 1"), "a = 1");
        assert_eq!(transform_condition("a is not b"), "a <> b");
        assert_eq!(transform_condition("a is b"), "a = b");
    }

    #[test]
    fn test_operands_are_normalized() {
        assert_eq!(transform_condition("user_age == max_age"), "userAge = maxAge");
        assert_eq!(transform_condition("done == True"), "done = true");
    }

    #[test]
    fn test_quoted_operator_is_not_an_operator() {
        assert_eq!(
            transform_condition("name == \"a == b\""),
            "name = \"a == b\""
        );
    }

    #[test]
    fn test_leading_not() {
        assert_eq!(transform_condition("not done"), "NOT done");
        assert_eq!(transform_condition("not is_ready"), "NOT isReady");
    }

    #[test]
    fn test_bare_condition_passes_through() {
        assert_eq!(transform_condition("flag"), "flag");
        assert_eq!(transform_condition("is_ready"), "isReady");
    }

    #[test]
    fn test_flat_and_chain() {
        assert_eq!(
            transform_all_conditions("a == 1 and b == 2"),
            "a = 1 and b = 2"
        );
    }

    #[test]
    fn test_connective_spelling_is_preserved() {
        assert_eq!(
            transform_all_conditions("a == 1 AND b == 2"),
            "a = 1 AND b = 2"
        );
    }

    #[test]
    fn test_mixed_connectives_stay_flat() {
        assert_eq!(
            transform_all_conditions("a == 1 and b == 2 or c != 3"),
            "a = 1 and b = 2 or c <> 3",
            "no precedence reordering between and/or"
        );
    }

    #[test]
    fn test_connective_inside_quotes_is_not_a_split_point() {
        assert_eq!(
            transform_all_conditions("name == \"rock and roll\""),
            "name = \"rock and roll\""
        );
    }
}
