use super::*;

#[test]
fn messages_name_the_offending_values() {
    let err = TreeError::NoSuchChild {
        nibble: 0xa,
        remaining: "beef".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "no child at nibble a, remaining path beef"
    );

    let err = TreeError::TooManyValues { max: 10, actual: 11 };
    assert_eq!(
        err.to_string(),
        "11 values exceed the configured maximum of 10"
    );
}
