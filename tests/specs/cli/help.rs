//! CLI help, version, and usage-error specs.

use crate::prelude::*;

#[test]
fn help_shows_usage_and_flags() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--parallel")
        .stdout_has("--message")
        .stdout_has("--init");
}

#[test]
fn version_names_the_binary() {
    cli().args(&["--version"]).passes().stdout_has("blocc");
}

#[test]
fn no_arguments_is_a_usage_error() {
    cli().fails(1).stderr_has("Error: no commands provided");
}
