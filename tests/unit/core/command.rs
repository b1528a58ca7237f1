use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::Quit.name(), "quit");
    assert_eq!(Command::OpenApp(AppKind::Browser).name(), "openBrowser");
    assert_eq!(Command::Custom("myCommand".to_string()).name(), "myCommand");
}

#[test]
fn names_round_trip_through_from_name() {
    for kind in AppKind::ALL {
        let cmd = Command::OpenApp(kind);
        assert_eq!(Command::from_name(cmd.name()), cmd);
    }
    assert_eq!(Command::from_name("historyNext"), Command::HistoryNext);
}

#[test]
fn unknown_names_become_custom() {
    assert_eq!(
        Command::from_name("doesNotExist"),
        Command::Custom("doesNotExist".to_string())
    );
}
