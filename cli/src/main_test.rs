use super::*;
use clap::CommandFactory;
use client::Theme;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn watch_defaults_match_page_timings() {
    let cli = Cli::try_parse_from(["scrapegoat", "watch", "crawl_1"]).unwrap();
    let Command::Watch(args) = cli.command else {
        panic!("expected watch");
    };
    assert_eq!(args.task_id, "crawl_1");
    assert_eq!(args.poll_config(), PollConfig::default());
    assert_eq!(args.timeout_secs, 10);
}

#[test]
fn watch_accepts_delay_overrides() {
    let cli = Cli::try_parse_from(["scrapegoat", "watch", "t", "--interval-ms", "500", "--reload-delay-ms", "0"])
        .unwrap();
    let Command::Watch(args) = cli.command else {
        panic!("expected watch");
    };
    let config = args.poll_config();
    assert_eq!(config.interval, Duration::from_millis(500));
    assert_eq!(config.reload_delay, Duration::ZERO);
}

#[test]
fn theme_subcommands_parse() {
    let cli = Cli::try_parse_from(["scrapegoat", "--state-file", "/tmp/x.json", "theme", "toggle"]).unwrap();
    assert_eq!(cli.state_file, PathBuf::from("/tmp/x.json"));
    assert!(matches!(cli.command, Command::Theme(ThemeCommand { command: ThemeSubcommand::Toggle })));
}

#[test]
fn run_theme_toggle_persists_light_then_dark() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    run_theme(path.clone(), ThemeSubcommand::Toggle).unwrap();
    let store = FileStore::open(&path).unwrap();
    assert_eq!(ThemeToggle::init(store, TerminalThemeView::default()).theme(), Theme::Light);

    run_theme(path.clone(), ThemeSubcommand::Toggle).unwrap();
    let store = FileStore::open(&path).unwrap();
    assert_eq!(ThemeToggle::init(store, TerminalThemeView::default()).theme(), Theme::Dark);
}

#[test]
fn run_theme_show_does_not_create_state_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    run_theme(path.clone(), ThemeSubcommand::Show).unwrap();

    assert!(!path.exists());
}
