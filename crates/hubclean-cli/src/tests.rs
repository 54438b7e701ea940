use super::*;

#[test]
fn parses_analyze_command() {
    let cli =
        Cli::try_parse_from(["hubclean-cli", "analyze"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Analyze { channel: None })
    ));
}

#[test]
fn parses_analyze_with_channel_override() {
    let cli = Cli::try_parse_from(["hubclean-cli", "analyze", "--channel", "#ops"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Analyze { channel: Some(ref c) }) if c == "#ops"
    ));
}

#[test]
fn parses_preview_command() {
    let cli =
        Cli::try_parse_from(["hubclean-cli", "preview"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Preview { pretty: false })
    ));
}

#[test]
fn parses_preview_pretty_flag() {
    let cli = Cli::try_parse_from(["hubclean-cli", "preview", "--pretty"])
        .expect("expected valid cli args");

    assert!(matches!(cli.command, Some(Commands::Preview { pretty: true })));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["hubclean-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn rejects_unknown_command() {
    assert!(Cli::try_parse_from(["hubclean-cli", "collect"]).is_err());
}

#[test]
fn preview_help_names_required_slack_settings() {
    let cmd = Cli::command();
    let preview = cmd
        .find_subcommand("preview")
        .expect("preview subcommand exists");
    let help = preview
        .get_long_about()
        .expect("preview has long help")
        .to_string();

    assert!(help.contains("SLACK_ACCESS_TOKEN"), "help: {help}");
    assert!(help.contains("SLACK_CHANNEL"), "help: {help}");
}
