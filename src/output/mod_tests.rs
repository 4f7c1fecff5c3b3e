use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert_eq!("github".parse::<OutputFormat>(), Ok(OutputFormat::Github));
    assert_eq!("gh".parse::<OutputFormat>(), Ok(OutputFormat::Github));
}

#[test]
fn output_format_from_str_is_case_insensitive() {
    assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert_eq!("GitHub".parse::<OutputFormat>(), Ok(OutputFormat::Github));
}

#[test]
fn output_format_unknown_is_error() {
    assert!("sarif".parse::<OutputFormat>().is_err());
}
