use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["stofinder"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_near_with_negative_coordinates() {
    let cli = Cli::try_parse_from(["stofinder", "near", "--lat", "-33.8688", "--lon", "151.2093"])
        .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Near { lat, lon }) => {
            assert!((lat + 33.8688).abs() < 1e-9);
            assert!((lon - 151.2093).abs() < 1e-9);
        }
        other => panic!("expected Near, got {other:?}"),
    }
}

#[test]
fn near_requires_both_coordinates() {
    assert!(Cli::try_parse_from(["stofinder", "near", "--lat", "50.6"]).is_err());
}

#[test]
fn parses_multi_word_address() {
    let cli = Cli::try_parse_from(["stofinder", "address", "Україна,", "Рівне,", "33000"])
        .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Address { text }) => assert_eq!(text.join(" "), "Україна, Рівне, 33000"),
        other => panic!("expected Address, got {other:?}"),
    }
}

#[test]
fn address_requires_text() {
    assert!(Cli::try_parse_from(["stofinder", "address"]).is_err());
}

#[test]
fn parses_ask_with_coordinate_text() {
    let cli = Cli::try_parse_from(["stofinder", "ask", "50.6199,", "26.2516"])
        .expect("expected valid cli args");
    let Some(Commands::Ask { text }) = cli.command else {
        panic!("expected Ask");
    };
    assert!(matches!(
        LocationQuery::parse(&text.join(" ")),
        Ok(LocationQuery::Coordinate(_))
    ));
}

#[test]
fn parses_help_and_start() {
    assert!(matches!(
        Cli::try_parse_from(["stofinder", "help"]).unwrap().command,
        Some(Commands::Help)
    ));
    assert!(matches!(
        Cli::try_parse_from(["stofinder", "start"]).unwrap().command,
        Some(Commands::Start)
    ));
}
