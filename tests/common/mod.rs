use assert_cmd::Command;

pub fn refprune_cmd() -> Command {
    let mut cmd = Command::cargo_bin("refprune").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
