use assert_cmd::{Command, cargo};
use predicates::str;
use rstest::rstest;

#[test]
fn command() {
	Command::new(cargo::cargo_bin!())
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains("Usage: poimap [OPTIONS] <COMMAND>"));
}

#[rstest]
#[case("add", "[OPTIONS] <SHAPE>")]
#[case("delete", "[OPTIONS] <IDS>...")]
#[case("import", "[OPTIONS] <FILE>")]
#[case("show", "[OPTIONS] <ID>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) {
	Command::new(cargo::cargo_bin!())
		.arg(sub_command)
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: poimap {sub_command} {usage}")));
}

#[test]
fn import_unsupported_format() {
	Command::new(cargo::cargo_bin!())
		.args(["import", "../testdata/poimap.yml", "-u", "http://127.0.0.1:1/"])
		.assert()
		.failure()
		.stderr(str::contains("unsupported file format '.yml'"));
}
