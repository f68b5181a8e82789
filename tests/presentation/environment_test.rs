use audio_prelabel::presentation::Environment;

#[test]
fn given_known_names_when_parsing_environment_then_case_is_ignored() {
    assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
    assert_eq!(" test ".parse::<Environment>(), Ok(Environment::Test));
    assert_eq!("production".parse::<Environment>(), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_returns_error() {
    let result = "staging".parse::<Environment>();

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_environment_when_naming_settings_file_then_uses_lowercase_name() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
    assert_eq!(Environment::default(), Environment::Local);
}
