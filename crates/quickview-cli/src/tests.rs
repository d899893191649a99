use super::*;

#[test]
fn parses_show_command() {
    let cli = Cli::try_parse_from(["quickview", "show", "classic-tee"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Show { ref handle } if handle == "classic-tee"
    ));
}

#[test]
fn parses_add_with_selections_in_order() {
    let cli = Cli::try_parse_from([
        "quickview",
        "add",
        "classic-tee",
        "--select",
        "Black",
        "--select",
        "Medium",
    ])
    .expect("expected valid cli args");
    match cli.command {
        Commands::Add {
            handle,
            select,
            no_wait,
        } => {
            assert_eq!(handle, "classic-tee");
            assert_eq!(select, ["Black", "Medium"]);
            assert!(!no_wait);
        }
        other => panic!("expected Add, got: {other:?}"),
    }
}

#[test]
fn parses_add_without_selections() {
    let cli = Cli::try_parse_from(["quickview", "add", "gift-card", "--no-wait"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Add { ref select, no_wait: true, .. } if select.is_empty()
    ));
}

#[test]
fn parses_cart_command() {
    let cli = Cli::try_parse_from(["quickview", "cart"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Cart));
}

#[test]
fn add_requires_handle() {
    assert!(Cli::try_parse_from(["quickview", "add"]).is_err());
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["quickview"]).is_err());
}
