use assert_cmd::Command;

pub fn chirpy_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chirpy").unwrap();
    cmd.env_remove("CHIRPY_DB");
    cmd.env_remove("CHIRPY_LOG");
    cmd
}
