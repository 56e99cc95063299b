use super::*;


fn parse_cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn parse(args: &[&str]) -> CliCommand {
    parse_cli(args).command
}

#[test]
fn cli_parse_list() {
    match parse(&["geodl", "list"]) {
        CliCommand::List { markdown } => assert!(!markdown),
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_markdown() {
    match parse(&["geodl", "list", "--markdown"]) {
        CliCommand::List { markdown } => assert!(markdown),
        _ => panic!("expected List with markdown"),
    }
}

#[test]
fn cli_parse_update_default_url() {
    match parse(&["geodl", "update"]) {
        CliCommand::Update { url } => assert!(url.is_none()),
        _ => panic!("expected Update"),
    }
}

#[test]
fn cli_parse_update_custom_url() {
    match parse(&["geodl", "update", "--url", "https://example.org/g.yml"]) {
        CliCommand::Update { url } => assert_eq!(url.as_deref(), Some("https://example.org/g.yml")),
        _ => panic!("expected Update with url"),
    }
}

#[test]
fn cli_parse_global_flags_before_and_after_command() {
    let cli = parse_cli(&["geodl", "-c", "custom.yml", "-n", "list", "-v"]);
    assert_eq!(cli.catalog, Some(PathBuf::from("custom.yml")));
    assert!(cli.no_download);
    assert!(cli.verbose);
}

#[test]
fn cli_rejects_both_proxy_kinds() {
    assert!(Cli::try_parse_from([
        "geodl",
        "--proxy-http",
        "a:1",
        "--proxy-sock5",
        "b:2",
        "list"
    ])
    .is_err());
}

#[test]
fn cli_requires_a_command() {
    assert!(Cli::try_parse_from(["geodl"]).is_err());
}

#[test]
fn proxy_flags_override_config() {
    let cli = parse_cli(&[
        "geodl",
        "--proxy-sock5",
        "127.0.0.1:1080",
        "--proxy-user",
        "me",
        "list",
    ]);
    let base = ProxyConfig {
        http: Some("corp:3128".into()),
        socks5: None,
        user: Some("corp-user".into()),
        pass: Some("corp-pass".into()),
    };
    let merged = cli.proxy.merge_into(Some(base));
    assert!(merged.http.is_none());
    assert_eq!(merged.socks5.as_deref(), Some("127.0.0.1:1080"));
    assert_eq!(merged.user.as_deref(), Some("me"));
    assert_eq!(merged.pass.as_deref(), Some("corp-pass"));
}

#[test]
fn download_options_thread_flags_and_config() {
    let cli = parse_cli(&["geodl", "-n", "--proxy-http", "p:8080", "download", "france"]);
    let cfg = GeodlConfig {
        connect_timeout_secs: 9,
        ..Default::default()
    };
    let opts = cli.download_options(&cfg).unwrap();
    assert!(opts.no_download);
    assert_eq!(opts.connect_timeout_secs, 9);
    assert_eq!(opts.proxy.unwrap().url(), "http://p:8080");
}

#[test]
fn catalog_flag_overrides_config_path() {
    let cfg = GeodlConfig::default();
    let cli = parse_cli(&["geodl", "list"]);
    assert_eq!(cli.catalog_path(&cfg), cfg.catalog_path);
    let cli = parse_cli(&["geodl", "--config", "/tmp/x.yml", "list"]);
    assert_eq!(cli.catalog_path(&cfg), PathBuf::from("/tmp/x.yml"));
}
